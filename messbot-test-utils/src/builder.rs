//! Declarative test builder.
//!
//! The builder collects tables and fixtures and creates all of them in `build()`.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// A menu row queued for insertion: (weekday, breakfast, lunch, snacks, dinner)
type QueuedMenu = (
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_mess_tables: bool,

    students: Vec<(i64, String)>, // (telegram_id, name)
    menus: Vec<QueuedMenu>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_mess_tables: false,
            students: Vec::new(),
            menus: Vec::new(),
        }
    }

    /// Add all mess tables to the test database.
    ///
    /// Creates Student, Menu, MealChoice and WeeklyChoice.
    pub fn with_mess_tables(mut self) -> Self {
        self.include_mess_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use messbot_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), messbot_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(Menu).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a registered student during `build()`.
    ///
    /// The admission number is derived from the telegram ID so that it stays unique.
    pub fn with_student(mut self, telegram_id: i64, name: impl Into<String>) -> Self {
        self.students.push((telegram_id, name.into()));
        self
    }

    /// Insert a weekday menu during `build()`.
    pub fn with_menu(
        mut self,
        weekday: impl Into<String>,
        breakfast: Option<&str>,
        lunch: Option<&str>,
        snacks: Option<&str>,
        dinner: Option<&str>,
    ) -> Self {
        self.menus.push((
            weekday.into(),
            breakfast.map(str::to_string),
            lunch.map(str::to_string),
            snacks.map(str::to_string),
            dinner.map(str::to_string),
        ));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_mess_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Student),
                schema.create_table_from_entity(entity::prelude::Menu),
                schema.create_table_from_entity(entity::prelude::MealChoice),
                schema.create_table_from_entity(entity::prelude::WeeklyChoice),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (telegram_id, name) in self.students {
            setup.student().insert_student(telegram_id, &name).await?;
        }

        for (weekday, breakfast, lunch, snacks, dinner) in self.menus {
            setup
                .menu()
                .insert_menu(
                    &weekday,
                    breakfast.as_deref(),
                    lunch.as_deref(),
                    snacks.as_deref(),
                    dinner.as_deref(),
                )
                .await?;
        }

        Ok(setup)
    }
}
