//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction.

use chrono::Utc;

use crate::model::StudentModel;

/// Create a mock student model with standard test values.
///
/// # Arguments
/// - `id` - Student record ID
/// - `telegram_id` - Telegram chat ID of the student
/// - `name` - Display name
pub fn mock_student_model(id: i32, telegram_id: i64, name: &str) -> StudentModel {
    StudentModel {
        id,
        name: name.to_string(),
        admission_no: format!("ADM{}", telegram_id),
        passout_year: 2027,
        profile_file_id: Some(format!("photo-{}", telegram_id)),
        telegram_id,
        created_at: Utc::now().naive_utc(),
    }
}
