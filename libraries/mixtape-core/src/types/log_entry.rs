/// Activity log entries
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Layout of the timestamp inside `[...]` on each log line
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// One line of the activity log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Local time the line was written
    pub timestamp: NaiveDateTime,
    /// Free-form message text
    pub message: String,
}

impl LogEntry {
    /// Create an entry
    pub fn new(timestamp: NaiveDateTime, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }

    /// Render as a log line, without the trailing newline
    pub fn to_line(&self) -> String {
        self.to_string()
    }

    /// Parse a `[<timestamp>] <message>` line
    ///
    /// Returns `None` for the banner and anything else that does not match.
    pub fn parse_line(line: &str) -> Option<Self> {
        let rest = line.strip_prefix('[')?;
        let (stamp, message) = rest.split_once("] ")?;
        let timestamp = NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S%.f").ok()?;
        Some(Self::new(timestamp, message))
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.timestamp.format(LOG_TIMESTAMP_FORMAT),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_line_round_trip() {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_micro_opt(3, 4, 5, 6)
            .unwrap();
        let entry = LogEntry::new(ts, "Starting playback: Imagine");
        let line = entry.to_line();
        assert_eq!(line, "[2025-01-02 03:04:05.000006] Starting playback: Imagine");
        assert_eq!(LogEntry::parse_line(&line), Some(entry));
    }

    #[test]
    fn test_message_may_contain_brackets() {
        let parsed = LogEntry::parse_line("[2025-01-02 03:04:05.000006] Error: [x] ] y").unwrap();
        assert_eq!(parsed.message, "Error: [x] ] y");
    }

    #[test]
    fn test_banner_is_not_an_entry() {
        assert!(LogEntry::parse_line("--- Mixtape Activity Log ---").is_none());
        assert!(LogEntry::parse_line("[not a date] hello").is_none());
    }
}
