use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string(Student::Name))
                    .col(string_uniq(Student::AdmissionNo))
                    .col(integer(Student::PassoutYear))
                    .col(string_null(Student::ProfileFileId))
                    .col(big_integer_uniq(Student::TelegramId))
                    .col(timestamp(Student::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    Name,
    AdmissionNo,
    PassoutYear,
    ProfileFileId,
    TelegramId,
    CreatedAt,
}
