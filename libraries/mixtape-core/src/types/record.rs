/// Play history records
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO-8601 layout used for stored and displayed play timestamps.
///
/// Fixed width, so lexical order equals chronological order.
pub const RECORD_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One completed play of a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// Track title as entered by the user
    pub title: String,
    /// Local wall-clock time the play was recorded
    pub played_at: NaiveDateTime,
}

impl PlayRecord {
    /// Create a record
    pub fn new(title: impl Into<String>, played_at: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            played_at,
        }
    }

    /// Timestamp rendered with [`RECORD_TIMESTAMP_FORMAT`]
    pub fn timestamp(&self) -> String {
        self.played_at.format(RECORD_TIMESTAMP_FORMAT).to_string()
    }

    /// Parse a stored timestamp
    ///
    /// Accepts the ISO `T` separator as well as a space, with or without
    /// fractional seconds.
    pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
    }
}

impl fmt::Display for PlayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' - {}", self.title, self.timestamp())
    }
}

/// Current local time truncated to microseconds
///
/// Stores keep six fractional digits, so anything finer would not survive a
/// round trip.
pub fn now_micros() -> NaiveDateTime {
    let now = Local::now().naive_local();
    let micros = now.nanosecond() / 1_000 * 1_000;
    now.with_nanosecond(micros).unwrap_or(now)
}
