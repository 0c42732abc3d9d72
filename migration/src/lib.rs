pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_student_table;
mod m20250601_000002_create_menu_table;
mod m20250601_000003_create_meal_choice_table;
mod m20250601_000004_create_weekly_choice_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_student_table::Migration),
            Box::new(m20250601_000002_create_menu_table::Migration),
            Box::new(m20250601_000003_create_meal_choice_table::Migration),
            Box::new(m20250601_000004_create_weekly_choice_table::Migration),
        ]
    }
}
