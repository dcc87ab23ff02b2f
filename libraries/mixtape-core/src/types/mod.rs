//! Domain types: play records, log entries, column specs and playback results

mod column;
mod log_entry;
mod playback;
mod record;

pub use column::{ColumnConstraint, ColumnSpec};
pub use log_entry::{LogEntry, LOG_TIMESTAMP_FORMAT};
pub use playback::{Notice, NoticeLevel, Playback, PlaybackSource};
pub use record::{now_micros, PlayRecord, RECORD_TIMESTAMP_FORMAT};
