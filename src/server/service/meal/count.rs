use std::collections::BTreeMap;

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{CaffeineChoice, MealType};
use sea_orm::{ActiveEnum, ConnectionTrait, Iterable};

use crate::{
    model::meal::MealCountDto,
    server::{
        data::student::StudentRepository, error::Error, service::meal::resolver::MealResolver,
    },
};

pub struct MealCountService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MealCountService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Counts how many students eat veg, non-veg and each caffeine option on `date`.
    ///
    /// Every student is resolved individually through [`MealResolver`], so students without
    /// any preference are counted under the defaults. All five caffeine buckets are present in
    /// the result even when empty. Student names are listed in registration order.
    ///
    /// # Returns
    /// - `Ok(MealCountDto)` - Counts and name lists for `date`
    /// - `Err(Error::DbErr)` - Reading students or preferences failed
    pub async fn count_for_date(&self, date: NaiveDate) -> Result<MealCountDto, Error> {
        let students = StudentRepository::new(self.db).get_all().await?;
        let resolver = MealResolver::new(self.db);

        let mut counts = MealCountDto {
            date: date.format("%Y-%m-%d").to_string(),
            caffeine: CaffeineChoice::iter().map(|c| (c.to_value(), 0)).collect(),
            caffeine_students: CaffeineChoice::iter()
                .map(|c| (c.to_value(), Vec::new()))
                .collect::<BTreeMap<_, _>>(),
            ..Default::default()
        };

        for student in students {
            let meal = resolver.resolve(student.id, date).await?;

            match meal.meal_type {
                MealType::Veg => {
                    counts.veg += 1;
                    counts.veg_students.push(student.name.clone());
                }
                MealType::NonVeg => {
                    counts.non_veg += 1;
                    counts.non_veg_students.push(student.name.clone());
                }
            }

            let bucket = meal.caffeine_label();
            *counts.caffeine.entry(bucket.clone()).or_default() += 1;
            counts
                .caffeine_students
                .entry(bucket)
                .or_default()
                .push(student.name);
        }

        tracing::debug!(
            "Counted meals for {}: {} veg, {} non-veg",
            counts.date,
            counts.veg,
            counts.non_veg
        );

        Ok(counts)
    }
}
