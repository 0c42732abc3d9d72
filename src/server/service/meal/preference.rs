use chrono::{NaiveDate, Weekday};
use entity::sea_orm_active_enums::{CaffeineChoice, MealType};
use sea_orm::ConnectionTrait;

use crate::server::{
    data::{meal_choice::MealChoiceRepository, weekly_choice::WeeklyChoiceRepository},
    error::Error,
    model::db::{MealChoiceModel, WeeklyChoiceModel},
    util::time::{weekday_name, WEEKDAYS},
};

/// Persists meal preferences collected by the chat wizards.
///
/// Both operations are upserts: the last write for a key wins.
pub struct PreferenceService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PreferenceService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Saves the preference of a student for one specific date.
    pub async fn save_meal_choice(
        &self,
        student_id: i32,
        date: NaiveDate,
        meal_type: MealType,
        caffeine: CaffeineChoice,
    ) -> Result<MealChoiceModel, Error> {
        let choice = MealChoiceRepository::new(self.db)
            .upsert(student_id, date, meal_type, caffeine)
            .await?;

        tracing::debug!(
            "Saved meal choice for student ID {} on {}",
            student_id,
            date
        );

        Ok(choice)
    }

    /// Saves the recurring preference of a student for a weekday.
    pub async fn save_weekly_choice(
        &self,
        student_id: i32,
        weekday: Weekday,
        meal_type: MealType,
        caffeine: CaffeineChoice,
    ) -> Result<WeeklyChoiceModel, Error> {
        let choice = WeeklyChoiceRepository::new(self.db)
            .upsert(student_id, weekday_name(weekday), meal_type, caffeine)
            .await?;

        tracing::debug!(
            "Saved weekly choice for student ID {} on {}",
            student_id,
            weekday_name(weekday)
        );

        Ok(choice)
    }

    /// Returns the weekly preferences of a student for every weekday, Monday first.
    ///
    /// Weekdays without a saved preference are `None`.
    pub async fn weekly_plan(
        &self,
        student_id: i32,
    ) -> Result<Vec<(Weekday, Option<WeeklyChoiceModel>)>, Error> {
        let mut choices = WeeklyChoiceRepository::new(self.db)
            .get_all_by_student(student_id)
            .await?;

        let plan = WEEKDAYS
            .into_iter()
            .map(|weekday| {
                let choice = choices
                    .iter()
                    .position(|choice| choice.weekday == weekday_name(weekday))
                    .map(|index| choices.swap_remove(index));

                (weekday, choice)
            })
            .collect();

        Ok(plan)
    }
}
