//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate.

/// A registered student.
///
/// # Fields (from `entity::student::Model`)
/// - `id` - Primary key
/// - `name` - Display name given at registration
/// - `admission_no` - Hostel admission number (unique)
/// - `passout_year` - Expected pass-out year
/// - `profile_file_id` - Telegram file ID of the profile photo
/// - `telegram_id` - Telegram chat ID the student registered from (unique)
/// - `created_at` - Registration timestamp
pub type StudentModel = entity::student::Model;

/// Menu for one weekday, keyed by the canonical weekday name.
pub type MenuModel = entity::menu::Model;

/// Meal preference for one specific date, overriding the weekly default.
pub type MealChoiceModel = entity::meal_choice::Model;

/// Recurring meal preference for one weekday.
pub type WeeklyChoiceModel = entity::weekly_choice::Model;
