//! Environment configuration.

use std::time::Duration;

use chrono::FixedOffset;

use crate::server::{error::config::ConfigError, util::time::DEFAULT_OFFSET};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MENU_API_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost,http://localhost:5173";

pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Bot is only started when a token is configured
    pub telegram_bot_token: Option<String>,
    /// Remote menu service; menus are read from the local database when unset
    pub menu_api_url: Option<String>,
    pub menu_api_timeout: Duration,
    pub utc_offset: FixedOffset,
    pub ticket_font_path: Option<String>,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url =
            var("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match var("PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let menu_api_timeout = match var("MENU_API_TIMEOUT_SECS") {
            Some(secs) => match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                Ok(_) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "MENU_API_TIMEOUT_SECS".to_string(),
                        reason: "timeout must be at least one second".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "MENU_API_TIMEOUT_SECS".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_MENU_API_TIMEOUT_SECS),
        };

        let offset_minutes = match var("MESS_UTC_OFFSET_MINUTES") {
            Some(minutes) => minutes.trim().parse::<i32>().map_err(|e| {
                ConfigError::InvalidEnvValue {
                    var: "MESS_UTC_OFFSET_MINUTES".to_string(),
                    reason: e.to_string(),
                }
            })?,
            None => DEFAULT_OFFSET.local_minus_utc() / 60,
        };
        let utc_offset =
            FixedOffset::east_opt(offset_minutes * 60).ok_or_else(|| ConfigError::InvalidEnvValue {
                var: "MESS_UTC_OFFSET_MINUTES".to_string(),
                reason: format!("{} minutes is outside of +/- 24 hours", offset_minutes),
            })?;

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            database_url,
            port,
            telegram_bot_token: var("TELEGRAM_BOT_TOKEN"),
            menu_api_url: var("MENU_API_URL").map(|url| url.trim_end_matches('/').to_string()),
            menu_api_timeout,
            utc_offset,
            ticket_font_path: var("TICKET_FONT_PATH"),
            cors_origins,
        })
    }
}
