use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_create_student_table::Student;

static FK_WEEKLY_CHOICE_STUDENT_ID: &str = "fk-weekly_choice-student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WeeklyChoice::Table)
                    .if_not_exists()
                    .col(integer(WeeklyChoice::StudentId))
                    .col(string_len(WeeklyChoice::Weekday, 16))
                    .col(string_len(WeeklyChoice::VegOrNonveg, 16))
                    .col(string_len(WeeklyChoice::CaffeineChoice, 16))
                    .col(timestamp(WeeklyChoice::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(WeeklyChoice::StudentId)
                            .col(WeeklyChoice::Weekday),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_WEEKLY_CHOICE_STUDENT_ID)
                            .from(WeeklyChoice::Table, WeeklyChoice::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WeeklyChoice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WeeklyChoice {
    Table,
    StudentId,
    Weekday,
    VegOrNonveg,
    CaffeineChoice,
    UpdatedAt,
}
