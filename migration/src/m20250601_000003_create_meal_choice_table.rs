use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_create_student_table::Student;

static FK_MEAL_CHOICE_STUDENT_ID: &str = "fk-meal_choice-student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign key is declared inline so the migration also runs on SQLite
        manager
            .create_table(
                Table::create()
                    .table(MealChoice::Table)
                    .if_not_exists()
                    .col(integer(MealChoice::StudentId))
                    .col(date(MealChoice::Date))
                    .col(string_len(MealChoice::VegOrNonveg, 16))
                    .col(string_len(MealChoice::CaffeineChoice, 16))
                    .col(timestamp(MealChoice::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(MealChoice::StudentId)
                            .col(MealChoice::Date),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MEAL_CHOICE_STUDENT_ID)
                            .from(MealChoice::Table, MealChoice::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MealChoice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MealChoice {
    Table,
    StudentId,
    Date,
    VegOrNonveg,
    CaffeineChoice,
    UpdatedAt,
}
