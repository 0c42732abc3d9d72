use std::time::Duration;

use chrono::Weekday;
use reqwest::StatusCode;
use sea_orm::DatabaseConnection;

use crate::{
    model::menu::MenuDto,
    server::{
        error::{mess::MessError, Error},
        service::menu::MenuService,
        util::time::weekday_name,
    },
};

/// Client for the `GET /menu/{weekday}` endpoint of a remote menu service.
#[derive(Clone, Debug)]
pub struct MenuApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl MenuApiClient {
    /// Creates a client for the menu service at `base_url`, e.g. `http://menu:8000`.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a client whose requests fail once `timeout` has elapsed.
    ///
    /// # Returns
    /// - `Ok(MenuApiClient)` - Client for the menu service at `base_url`
    /// - `Err(Error::MenuApiError)` - HTTP client could not be built
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self::new(client, base_url))
    }

    /// Fetches the menu of a weekday.
    ///
    /// # Returns
    /// - `Ok(MenuDto)` - Menu returned with status 200
    /// - `Err(Error::MessError(MessError::MenuNotFound))` - Remote answered 404
    /// - `Err(Error::MenuApiError)` - Request failed or timed out, any other status or a malformed body
    pub async fn get_menu(&self, weekday: Weekday) -> Result<MenuDto, Error> {
        let weekday = weekday_name(weekday);
        let url = format!("{}/menu/{}", self.base_url, weekday);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(MessError::MenuNotFound(weekday.to_string()).into());
        }

        let menu = response.error_for_status()?.json::<MenuDto>().await?;

        Ok(menu)
    }
}

/// Where the chat bot reads weekday menus from.
#[derive(Clone, Debug)]
pub enum MenuSource {
    /// Menus stored in the bot's own database
    Local(DatabaseConnection),
    /// Menus served by a separate menu service
    Remote(MenuApiClient),
}

impl MenuSource {
    /// Returns the menu of a weekday, failing with `MenuNotFound` when none is defined.
    pub async fn get_menu(&self, weekday: Weekday) -> Result<MenuDto, Error> {
        match self {
            Self::Local(db) => MenuService::new(db).get_menu(weekday_name(weekday)).await,
            Self::Remote(client) => client.get_menu(weekday).await,
        }
    }
}
