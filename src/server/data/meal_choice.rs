use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{CaffeineChoice, MealType};
use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::MealChoiceModel;

/// Dated meal preferences, one row per (student, date).
pub struct MealChoiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MealChoiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the preference or overwrites the existing one for the same student and date
    pub async fn upsert(
        &self,
        student_id: i32,
        date: NaiveDate,
        veg_or_nonveg: MealType,
        caffeine_choice: CaffeineChoice,
    ) -> Result<MealChoiceModel, DbErr> {
        let choice = entity::meal_choice::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            date: ActiveValue::Set(date),
            veg_or_nonveg: ActiveValue::Set(veg_or_nonveg),
            caffeine_choice: ActiveValue::Set(caffeine_choice),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::MealChoice::insert(choice)
            .on_conflict(
                OnConflict::columns([
                    entity::meal_choice::Column::StudentId,
                    entity::meal_choice::Column::Date,
                ])
                .update_columns([
                    entity::meal_choice::Column::VegOrNonveg,
                    entity::meal_choice::Column::CaffeineChoice,
                    entity::meal_choice::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get(
        &self,
        student_id: i32,
        date: NaiveDate,
    ) -> Result<Option<MealChoiceModel>, DbErr> {
        entity::prelude::MealChoice::find_by_id((student_id, date))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod upsert {
        use chrono::NaiveDate;
        use entity::sea_orm_active_enums::{CaffeineChoice, MealType};
        use messbot_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::server::data::meal_choice::MealChoiceRepository;

        /// Expect exactly one row holding the latest values after upserting twice
        #[tokio::test]
        async fn keeps_single_row_with_latest_values() -> Result<(), TestError> {
            let test = TestBuilder::new().with_mess_tables().build().await?;
            let student = test.student().insert_student(1001, "Asha").await?;
            let date = NaiveDate::from_ymd_opt(2025, 5, 15).unwrap();

            let choice_repo = MealChoiceRepository::new(&test.db);
            choice_repo
                .upsert(student.id, date, MealType::Veg, CaffeineChoice::Tea)
                .await?;
            let latest = choice_repo
                .upsert(student.id, date, MealType::NonVeg, CaffeineChoice::BlackCoffee)
                .await?;

            assert_eq!(latest.veg_or_nonveg, MealType::NonVeg);
            let rows = entity::prelude::MealChoice::find().all(&test.db).await?;
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].caffeine_choice, CaffeineChoice::BlackCoffee);

            Ok(())
        }

        /// Expect separate rows for different dates of the same student
        #[tokio::test]
        async fn keeps_dates_separate() -> Result<(), TestError> {
            let test = TestBuilder::new().with_mess_tables().build().await?;
            let student = test.student().insert_student(1001, "Asha").await?;

            let choice_repo = MealChoiceRepository::new(&test.db);
            for day in [15, 16] {
                let date = NaiveDate::from_ymd_opt(2025, 5, day).unwrap();
                choice_repo
                    .upsert(student.id, date, MealType::Veg, CaffeineChoice::Tea)
                    .await?;
            }

            let rows = entity::prelude::MealChoice::find().all(&test.db).await?;
            assert_eq!(rows.len(), 2);

            Ok(())
        }
    }

    mod get {
        use chrono::NaiveDate;
        use entity::sea_orm_active_enums::{CaffeineChoice, MealType};
        use messbot_test_utils::prelude::*;

        use crate::server::data::meal_choice::MealChoiceRepository;

        /// Expect a lookup to match on both student and date
        #[tokio::test]
        async fn finds_choice_for_student_and_date() -> Result<(), TestError> {
            let test = TestBuilder::new().with_mess_tables().build().await?;
            let asha = test.student().insert_student(1001, "Asha").await?;
            let bina = test.student().insert_student(1002, "Bina").await?;
            let date = NaiveDate::from_ymd_opt(2025, 5, 15).unwrap();
            test.preference()
                .insert_meal_choice(asha.id, date, MealType::Veg, CaffeineChoice::Coffee)
                .await?;

            let choice_repo = MealChoiceRepository::new(&test.db);

            assert!(choice_repo.get(asha.id, date).await?.is_some());
            assert!(choice_repo.get(bina.id, date).await?.is_none());
            assert!(choice_repo
                .get(asha.id, date.succ_opt().unwrap())
                .await?
                .is_none());

            Ok(())
        }
    }
}
