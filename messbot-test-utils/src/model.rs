//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main messbot crate to keep test signatures short.

/// Type alias for a registered student.
pub type StudentModel = entity::student::Model;

/// Type alias for a weekday menu row.
pub type MenuModel = entity::menu::Model;

/// Type alias for a dated meal preference.
pub type MealChoiceModel = entity::meal_choice::Model;

/// Type alias for a weekly meal preference.
pub type WeeklyChoiceModel = entity::weekly_choice::Model;
