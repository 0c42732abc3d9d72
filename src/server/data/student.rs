use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{db::StudentModel, student::NewStudent};

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new instance of [`StudentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new student
    ///
    /// Fails with a unique constraint violation when the telegram ID or admission number
    /// is already registered.
    pub async fn create(&self, student: NewStudent) -> Result<StudentModel, DbErr> {
        let student = entity::student::ActiveModel {
            name: ActiveValue::Set(student.name),
            admission_no: ActiveValue::Set(student.admission_no),
            passout_year: ActiveValue::Set(student.passout_year),
            profile_file_id: ActiveValue::Set(Some(student.profile_file_id)),
            telegram_id: ActiveValue::Set(student.telegram_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        student.insert(self.db).await
    }

    pub async fn get_by_telegram_id(&self, telegram_id: i64) -> Result<Option<StudentModel>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::TelegramId.eq(telegram_id))
            .one(self.db)
            .await
    }

    /// Returns every registered student ordered by registration
    pub async fn get_all(&self) -> Result<Vec<StudentModel>, DbErr> {
        entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await
    }
}
