//! SeaORM entities for the mess database.

pub mod prelude;

pub mod meal_choice;
pub mod menu;
pub mod sea_orm_active_enums;
pub mod student;
pub mod weekly_choice;
