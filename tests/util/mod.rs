//! Helpers turning a `TestContext` into application state for controller tests

use chrono::{TimeZone, Utc};
use messbot::server::{
    model::app::AppState,
    util::time::{MessClock, DEFAULT_OFFSET},
};
use messbot_test_utils::TestContext;

/// Extension trait for TestContext to create AppState with a frozen clock
pub trait TestContextExt {
    /// State whose clock reads 01:30 on Thursday 15 May 2025 mess time
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let now = Utc.with_ymd_and_hms(2025, 5, 14, 20, 0, 0).unwrap();

        AppState {
            db: self.db.clone(),
            clock: MessClock::frozen_at(DEFAULT_OFFSET, now),
        }
    }
}
