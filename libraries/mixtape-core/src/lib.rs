//! Mixtape Core
//!
//! Domain types, capability traits, and error handling shared by every
//! Mixtape crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `PlayRecord`, `LogEntry`, `ColumnSpec`, `Playback`, `Notice`
//! - **Core Traits**: `Player`, `HistoryStore`, `ActivityLog`
//! - **Error Handling**: Unified `MixtapeError` and `Result` types
//!
//! Concrete stores live in `mixtape-storage`, concrete players and the
//! orchestrator in `mixtape-playback`.
//!
//! # Example
//!
//! ```rust
//! use mixtape_core::types::{Notice, PlayRecord};
//! use chrono::NaiveDate;
//!
//! let played_at = NaiveDate::from_ymd_opt(2024, 5, 1)
//!     .unwrap()
//!     .and_hms_micro_opt(12, 30, 0, 0)
//!     .unwrap();
//! let record = PlayRecord::new("Imagine", played_at);
//! assert_eq!(record.to_string(), "'Imagine' - 2024-05-01T12:30:00.000000");
//!
//! let notice = Notice::success("Playback history saved.");
//! assert!(!notice.is_problem());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{MixtapeError, Result};
pub use traits::{ActivityLog, HistoryStore, Player};

pub use types::{
    ColumnConstraint, ColumnSpec, LogEntry, Notice, NoticeLevel, PlayRecord, Playback,
    PlaybackSource,
};
