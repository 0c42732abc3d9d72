use sea_orm::{ConnectionTrait, SqlErr};

use crate::server::{
    data::student::StudentRepository,
    error::{mess::MessError, Error},
    model::{db::StudentModel, student::NewStudent},
};

pub struct StudentService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a student from the answers of the registration wizard.
    ///
    /// # Returns
    /// - `Ok(StudentModel)` - Created student
    /// - `Err(Error::MessError(MessError::AlreadyRegistered))` - Telegram ID or admission
    ///   number already belongs to a student, nothing was written
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn register(&self, student: NewStudent) -> Result<StudentModel, Error> {
        let telegram_id = student.telegram_id;
        let admission_no = student.admission_no.clone();

        match StudentRepository::new(self.db).create(student).await {
            Ok(created) => {
                tracing::info!(
                    "Registered student ID {} for telegram ID {}",
                    created.id,
                    telegram_id
                );

                Ok(created)
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(MessError::AlreadyRegistered {
                        telegram_id,
                        admission_no,
                    }
                    .into())
                }
                _ => Err(err.into()),
            },
        }
    }

    pub async fn find_by_telegram_id(
        &self,
        telegram_id: i64,
    ) -> Result<Option<StudentModel>, Error> {
        Ok(StudentRepository::new(self.db)
            .get_by_telegram_id(telegram_id)
            .await?)
    }

    /// Like [`Self::find_by_telegram_id`] but treats an unknown chat as an error.
    pub async fn require_by_telegram_id(&self, telegram_id: i64) -> Result<StudentModel, Error> {
        self.find_by_telegram_id(telegram_id)
            .await?
            .ok_or_else(|| MessError::StudentNotFound(telegram_id).into())
    }
}

#[cfg(test)]
mod tests {
    use messbot_test_utils::prelude::*;

    use super::*;

    fn new_student(telegram_id: i64, admission_no: &str) -> NewStudent {
        NewStudent {
            name: "Asha Menon".to_string(),
            admission_no: admission_no.to_string(),
            passout_year: 2027,
            profile_file_id: "photo-file".to_string(),
            telegram_id,
        }
    }

    mod register {
        use super::*;

        /// Expect Ok with the created student for a new telegram ID and admission number
        #[tokio::test]
        async fn registers_new_student() -> Result<(), TestError> {
            let test = TestBuilder::new().with_mess_tables().build().await?;

            let student_service = StudentService::new(&test.db);
            let result = student_service.register(new_student(1001, "H-17")).await;

            assert!(result.is_ok());
            let student = result.unwrap();
            assert_eq!(student.admission_no, "H-17");
            assert_eq!(student.profile_file_id.as_deref(), Some("photo-file"));

            Ok(())
        }

        /// Expect AlreadyRegistered when the telegram ID is already registered
        #[tokio::test]
        async fn rejects_duplicate_telegram_id() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_mess_tables()
                .with_student(1001, "Asha")
                .build()
                .await?;

            let student_service = StudentService::new(&test.db);
            let result = student_service.register(new_student(1001, "H-99")).await;

            assert!(matches!(
                result,
                Err(Error::MessError(MessError::AlreadyRegistered { .. }))
            ));

            Ok(())
        }

        /// Expect AlreadyRegistered and no new row when the admission number is taken
        #[tokio::test]
        async fn rejects_duplicate_admission_no() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_mess_tables()
                .with_student(1001, "Asha")
                .build()
                .await?;

            let student_service = StudentService::new(&test.db);
            // Fixture students get the admission number ADM{telegram_id}
            let result = student_service.register(new_student(2002, "ADM1001")).await;

            assert!(matches!(
                result,
                Err(Error::MessError(MessError::AlreadyRegistered { .. }))
            ));
            assert!(student_service.find_by_telegram_id(2002).await.unwrap().is_none());

            Ok(())
        }

        /// Expect a database error, not a conflict, when required tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let student_service = StudentService::new(&test.db);
            let result = student_service.register(new_student(1001, "H-17")).await;

            assert!(matches!(result, Err(Error::DbErr(_))));

            Ok(())
        }
    }

    mod require_by_telegram_id {
        use super::*;

        /// Expect StudentNotFound for a chat that never registered
        #[tokio::test]
        async fn fails_for_unregistered_chat() -> Result<(), TestError> {
            let test = TestBuilder::new().with_mess_tables().build().await?;

            let student_service = StudentService::new(&test.db);
            let result = student_service.require_by_telegram_id(42).await;

            assert!(matches!(
                result,
                Err(Error::MessError(MessError::StudentNotFound(42)))
            ));

            Ok(())
        }

        /// Expect the registered student for a known chat
        #[tokio::test]
        async fn returns_registered_student() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_mess_tables()
                .with_student(1001, "Asha")
                .build()
                .await?;

            let student_service = StudentService::new(&test.db);
            let student = student_service.require_by_telegram_id(1001).await.unwrap();

            assert_eq!(student.name, "Asha");

            Ok(())
        }
    }
}
