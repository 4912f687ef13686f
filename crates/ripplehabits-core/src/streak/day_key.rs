//! Calendar-day keys for streak computation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// A calendar day (year, month, day) with no time-of-day or offset.
///
/// Serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Build a key from year, month and day. Returns `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The current UTC calendar day.
    pub fn today_utc() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Parse a stored check-in date.
    ///
    /// Accepts a plain `YYYY-MM-DD` date or an ISO 8601 timestamp with a `T`
    /// or space separator and minute or second precision. Timestamps with an
    /// offset (or `Z`) map to their UTC day; naive timestamps keep their date
    /// part. Anything else yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();

        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Some(Self(date));
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
            return Some(Self(timestamp.with_timezone(&Utc).date_naive()));
        }
        if let Some(utc) = value.strip_suffix(['Z', 'z']) {
            return parse_naive(utc).map(|timestamp| Self(timestamp.date()));
        }
        if let Some(timestamp) = OFFSET_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(value, format).ok())
        {
            return Some(Self(timestamp.with_timezone(&Utc).date_naive()));
        }
        parse_naive(value).map(|timestamp| Self(timestamp.date()))
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// The day before, or `None` at the lower end of the calendar.
    pub fn previous(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// Shift by a signed number of days.
    pub fn offset(self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(chrono::Duration::try_days(days)?)
            .map(Self)
    }

    /// Whole days from `self` to `later` (negative if `later` is earlier).
    pub fn days_until(self, later: DayKey) -> i64 {
        (later.0 - self.0).num_days()
    }

    pub fn weekday(self) -> chrono::Weekday {
        self.0.weekday()
    }

    pub fn day_of_month(self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::InvalidValue {
            field: "date".into(),
            message: format!("'{s}' is not a calendar date (expected YYYY-MM-DD)"),
        })
    }
}
