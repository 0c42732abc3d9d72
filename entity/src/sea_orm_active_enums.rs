use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Vegetarian or non-vegetarian meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MealType {
    #[sea_orm(string_value = "Veg")]
    #[serde(rename = "Veg")]
    Veg,
    #[sea_orm(string_value = "Non-Veg")]
    #[serde(rename = "Non-Veg")]
    NonVeg,
}

/// Hot drink served with the meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CaffeineChoice {
    #[sea_orm(string_value = "Tea")]
    #[serde(rename = "Tea")]
    Tea,
    #[sea_orm(string_value = "Coffee")]
    #[serde(rename = "Coffee")]
    Coffee,
    #[sea_orm(string_value = "Black Coffee")]
    #[serde(rename = "Black Coffee")]
    BlackCoffee,
    #[sea_orm(string_value = "Black Tea")]
    #[serde(rename = "Black Tea")]
    BlackTea,
    #[sea_orm(string_value = "None")]
    #[serde(rename = "None")]
    NoCaffeine,
}
