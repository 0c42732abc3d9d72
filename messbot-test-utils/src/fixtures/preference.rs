use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{CaffeineChoice, MealType};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{MealChoiceModel, WeeklyChoiceModel},
    TestContext,
};

impl TestContext {
    pub fn preference(&self) -> PreferenceFixtures<'_> {
        PreferenceFixtures { setup: self }
    }
}

pub struct PreferenceFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PreferenceFixtures<'a> {
    /// Insert a dated meal preference for a student.
    pub async fn insert_meal_choice(
        &self,
        student_id: i32,
        date: NaiveDate,
        veg_or_nonveg: MealType,
        caffeine_choice: CaffeineChoice,
    ) -> Result<MealChoiceModel, TestError> {
        Ok(
            entity::prelude::MealChoice::insert(entity::meal_choice::ActiveModel {
                student_id: ActiveValue::Set(student_id),
                date: ActiveValue::Set(date),
                veg_or_nonveg: ActiveValue::Set(veg_or_nonveg),
                caffeine_choice: ActiveValue::Set(caffeine_choice),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a weekly meal preference for a student.
    pub async fn insert_weekly_choice(
        &self,
        student_id: i32,
        weekday: &str,
        veg_or_nonveg: MealType,
        caffeine_choice: CaffeineChoice,
    ) -> Result<WeeklyChoiceModel, TestError> {
        Ok(
            entity::prelude::WeeklyChoice::insert(entity::weekly_choice::ActiveModel {
                student_id: ActiveValue::Set(student_id),
                weekday: ActiveValue::Set(weekday.to_string()),
                veg_or_nonveg: ActiveValue::Set(veg_or_nonveg),
                caffeine_choice: ActiveValue::Set(caffeine_choice),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
