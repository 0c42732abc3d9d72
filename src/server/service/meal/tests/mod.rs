
use chrono::NaiveDate;
use entity::sea_orm_active_enums::{CaffeineChoice, MealType};
use messbot_test_utils::prelude::*;

/// Thursday
fn thursday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()
}

/// Wednesday
fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 14).unwrap()
}
