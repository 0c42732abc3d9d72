//! Civil time and weekday utilities.
//!
//! The mess operates on a single fixed UTC offset. Every "today"/"tomorrow" computation in
//! the application goes through [`MessClock`] so that preference saving, ticket rendering and
//! meal counting agree on the date regardless of the server's own timezone.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, Utc, Weekday};

use crate::server::error::{mess::MessError, Error};

/// Weekdays in canonical Monday-first order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Default civil offset of the mess, +05:30.
pub const DEFAULT_OFFSET: FixedOffset = match FixedOffset::east_opt(330 * 60) {
    Some(offset) => offset,
    None => panic!("default mess offset is out of range"),
};

/// Clock pinned to the mess's civil time offset.
#[derive(Clone, Copy, Debug)]
pub struct MessClock {
    offset: FixedOffset,
    frozen_at: Option<DateTime<Utc>>,
}

impl MessClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self {
            offset,
            frozen_at: None,
        }
    }

    /// Creates a clock that always reports `now` as the current instant.
    pub fn frozen_at(offset: FixedOffset, now: DateTime<Utc>) -> Self {
        Self {
            offset,
            frozen_at: Some(now),
        }
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        self.frozen_at
            .unwrap_or_else(Utc::now)
            .with_timezone(&self.offset)
    }

    /// Current calendar date in mess civil time.
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Calendar date following [`Self::today`].
    ///
    /// # Returns
    /// - `Ok(NaiveDate)` - Tomorrow's date
    /// - `Err(Error::ParseError)` - Today is the last representable date
    pub fn tomorrow(&self) -> Result<NaiveDate, Error> {
        let today = self.today();

        today.checked_add_days(Days::new(1)).ok_or_else(|| {
            Error::ParseError(format!("Failed to calculate the day after {}", today))
        })
    }
}

/// Canonical English name of a weekday, used as the storage key for weekly data.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parses a canonical weekday name. Abbreviations and other casings are rejected.
pub fn parse_weekday(name: &str) -> Result<Weekday, MessError> {
    WEEKDAYS
        .into_iter()
        .find(|weekday| weekday_name(*weekday) == name)
        .ok_or_else(|| MessError::InvalidWeekday(name.to_string()))
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(date: &str) -> Result<NaiveDate, MessError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| MessError::InvalidDate(date.to_string()))
}

/// Formats a date the way it is shown to students, e.g. `Thursday, 15 May 2025`.
pub fn display_date(date: NaiveDate) -> String {
    format!("{}, {}", weekday_name(date.weekday()), date.format("%-d %B %Y"))
}
