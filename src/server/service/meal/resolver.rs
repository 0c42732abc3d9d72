use chrono::{Datelike, NaiveDate};
use sea_orm::ConnectionTrait;

use crate::server::{
    data::{meal_choice::MealChoiceRepository, weekly_choice::WeeklyChoiceRepository},
    error::Error,
    model::meal::{PreferenceSource, ResolvedMeal},
    util::time::weekday_name,
};

/// Resolves the meal a student will be served on a date.
///
/// This is the only place the precedence between dated, weekly and default preferences is
/// decided. Tickets and meal counts both go through it.
pub struct MealResolver<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MealResolver<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolves the effective meal preference of a student for `date`.
    ///
    /// Precedence, first match wins:
    /// 1. Dated preference for (`student_id`, `date`)
    /// 2. Weekly preference for (`student_id`, weekday of `date`)
    /// 3. `Non-Veg` with no caffeine
    ///
    /// # Returns
    /// - `Ok(ResolvedMeal)` - Effective preference and where it came from
    /// - `Err(Error::DbErr)` - Either lookup failed
    pub async fn resolve(&self, student_id: i32, date: NaiveDate) -> Result<ResolvedMeal, Error> {
        let choice_repo = MealChoiceRepository::new(self.db);

        if let Some(choice) = choice_repo.get(student_id, date).await? {
            return Ok(ResolvedMeal {
                meal_type: choice.veg_or_nonveg,
                caffeine: choice.caffeine_choice,
                source: PreferenceSource::Dated,
            });
        }

        let weekly_repo = WeeklyChoiceRepository::new(self.db);

        if let Some(weekly) = weekly_repo
            .get(student_id, weekday_name(date.weekday()))
            .await?
        {
            return Ok(ResolvedMeal {
                meal_type: weekly.veg_or_nonveg,
                caffeine: weekly.caffeine_choice,
                source: PreferenceSource::Weekly,
            });
        }

        Ok(ResolvedMeal::fallback())
    }
}
