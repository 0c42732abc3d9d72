use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::StudentModel, TestContext};

impl TestContext {
    pub fn student(&self) -> StudentFixtures<'_> {
        StudentFixtures { setup: self }
    }
}

pub struct StudentFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> StudentFixtures<'a> {
    /// Insert a student whose admission number is derived from the telegram ID.
    pub async fn insert_student(
        &self,
        telegram_id: i64,
        name: &str,
    ) -> Result<StudentModel, TestError> {
        self.insert_student_with_photo(telegram_id, name, None).await
    }

    /// Insert a student with an optional profile photo file ID.
    pub async fn insert_student_with_photo(
        &self,
        telegram_id: i64,
        name: &str,
        profile_file_id: Option<&str>,
    ) -> Result<StudentModel, TestError> {
        Ok(
            entity::prelude::Student::insert(entity::student::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                admission_no: ActiveValue::Set(format!("ADM{}", telegram_id)),
                passout_year: ActiveValue::Set(2027),
                profile_file_id: ActiveValue::Set(profile_file_id.map(str::to_string)),
                telegram_id: ActiveValue::Set(telegram_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
