use chrono::Utc;
use entity::sea_orm_active_enums::{CaffeineChoice, MealType};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::db::WeeklyChoiceModel;

/// Weekly default meal preferences, one row per (student, weekday).
pub struct WeeklyChoiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WeeklyChoiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the preference or overwrites the existing one for the same student and weekday
    ///
    /// `weekday` must be a canonical weekday name.
    pub async fn upsert(
        &self,
        student_id: i32,
        weekday: &str,
        veg_or_nonveg: MealType,
        caffeine_choice: CaffeineChoice,
    ) -> Result<WeeklyChoiceModel, DbErr> {
        let choice = entity::weekly_choice::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            weekday: ActiveValue::Set(weekday.to_string()),
            veg_or_nonveg: ActiveValue::Set(veg_or_nonveg),
            caffeine_choice: ActiveValue::Set(caffeine_choice),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::WeeklyChoice::insert(choice)
            .on_conflict(
                OnConflict::columns([
                    entity::weekly_choice::Column::StudentId,
                    entity::weekly_choice::Column::Weekday,
                ])
                .update_columns([
                    entity::weekly_choice::Column::VegOrNonveg,
                    entity::weekly_choice::Column::CaffeineChoice,
                    entity::weekly_choice::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get(
        &self,
        student_id: i32,
        weekday: &str,
    ) -> Result<Option<WeeklyChoiceModel>, DbErr> {
        entity::prelude::WeeklyChoice::find_by_id((student_id, weekday.to_string()))
            .one(self.db)
            .await
    }

    pub async fn get_all_by_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<WeeklyChoiceModel>, DbErr> {
        entity::prelude::WeeklyChoice::find()
            .filter(entity::weekly_choice::Column::StudentId.eq(student_id))
            .all(self.db)
            .await
    }
}
