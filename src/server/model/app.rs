use sea_orm::DatabaseConnection;

use crate::server::util::time::{MessClock, DEFAULT_OFFSET};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub clock: MessClock,
}

/// Builds state on the default mess offset, used where no configuration is loaded.
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            clock: MessClock::new(DEFAULT_OFFSET),
        }
    }
}
