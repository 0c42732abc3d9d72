use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menu::Table)
                    .if_not_exists()
                    .col(string_len(Menu::Weekday, 16).primary_key())
                    .col(text_null(Menu::Breakfast))
                    .col(text_null(Menu::Lunch))
                    .col(text_null(Menu::Snacks))
                    .col(text_null(Menu::Dinner))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Menu::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Menu {
    Table,
    Weekday,
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
}
