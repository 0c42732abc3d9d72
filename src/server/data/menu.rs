use sea_orm::{sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::MenuModel;

pub struct MenuRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the menu for a weekday or replaces every meal slot of the existing one
    pub async fn upsert(
        &self,
        weekday: &str,
        breakfast: Option<String>,
        lunch: Option<String>,
        snacks: Option<String>,
        dinner: Option<String>,
    ) -> Result<MenuModel, DbErr> {
        let menu = entity::menu::ActiveModel {
            weekday: ActiveValue::Set(weekday.to_string()),
            breakfast: ActiveValue::Set(breakfast),
            lunch: ActiveValue::Set(lunch),
            snacks: ActiveValue::Set(snacks),
            dinner: ActiveValue::Set(dinner),
        };

        entity::prelude::Menu::insert(menu)
            .on_conflict(
                OnConflict::column(entity::menu::Column::Weekday)
                    .update_columns([
                        entity::menu::Column::Breakfast,
                        entity::menu::Column::Lunch,
                        entity::menu::Column::Snacks,
                        entity::menu::Column::Dinner,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get(&self, weekday: &str) -> Result<Option<MenuModel>, DbErr> {
        entity::prelude::Menu::find_by_id(weekday.to_string())
            .one(self.db)
            .await
    }
}
