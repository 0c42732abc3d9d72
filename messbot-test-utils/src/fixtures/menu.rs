use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::MenuModel, TestContext};

impl TestContext {
    pub fn menu(&self) -> MenuFixtures<'_> {
        MenuFixtures { setup: self }
    }
}

pub struct MenuFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> MenuFixtures<'a> {
    pub async fn insert_menu(
        &self,
        weekday: &str,
        breakfast: Option<&str>,
        lunch: Option<&str>,
        snacks: Option<&str>,
        dinner: Option<&str>,
    ) -> Result<MenuModel, TestError> {
        Ok(entity::prelude::Menu::insert(entity::menu::ActiveModel {
            weekday: ActiveValue::Set(weekday.to_string()),
            breakfast: ActiveValue::Set(breakfast.map(str::to_string)),
            lunch: ActiveValue::Set(lunch.map(str::to_string)),
            snacks: ActiveValue::Set(snacks.map(str::to_string)),
            dinner: ActiveValue::Set(dinner.map(str::to_string)),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
