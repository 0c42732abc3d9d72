//! Menu service layer.
//!
//! [`MenuService`] manages the weekday menus stored in the local database and backs the HTTP
//! API. [`source::MenuSource`] is what the chat bot reads menus through, either that same
//! database or a remote menu API.

pub mod source;

#[cfg(test)]
mod tests;

use sea_orm::ConnectionTrait;

use crate::{
    model::menu::MenuDto,
    server::{
        data::menu::MenuRepository,
        error::{mess::MessError, Error},
        util::time::{parse_weekday, weekday_name},
    },
};

pub struct MenuService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates or replaces the menu of a weekday.
    ///
    /// Every slot of an existing menu is overwritten, slots missing from `menu` become empty.
    ///
    /// # Returns
    /// - `Ok(MenuDto)` - Stored menu
    /// - `Err(Error::MessError(MessError::InvalidWeekday))` - Weekday is not a canonical name
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn upsert_menu(&self, menu: MenuDto) -> Result<MenuDto, Error> {
        let weekday = parse_weekday(&menu.weekday)?;

        let stored = MenuRepository::new(self.db)
            .upsert(
                weekday_name(weekday),
                menu.breakfast,
                menu.lunch,
                menu.snacks,
                menu.dinner,
            )
            .await?;

        tracing::info!("Stored menu for {}", stored.weekday);

        Ok(stored.into())
    }

    /// Returns the menu of a weekday.
    ///
    /// # Returns
    /// - `Ok(MenuDto)` - Menu for the weekday
    /// - `Err(Error::MessError(MessError::InvalidWeekday))` - Weekday is not a canonical name
    /// - `Err(Error::MessError(MessError::MenuNotFound))` - No menu stored for the weekday
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_menu(&self, weekday: &str) -> Result<MenuDto, Error> {
        let weekday = weekday_name(parse_weekday(weekday)?);

        match MenuRepository::new(self.db).get(weekday).await? {
            Some(menu) => Ok(menu.into()),
            None => Err(MessError::MenuNotFound(weekday.to_string()).into()),
        }
    }
}
