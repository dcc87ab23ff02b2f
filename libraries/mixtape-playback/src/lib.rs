//! Mixtape - Players and Orchestration
//!
//! This crate provides:
//! - A remote streaming stub player
//! - A local player backed by a catalog of pre-registered audio files
//! - [`MusicService`], which logs, plays, records and logs again
//!
//! # Architecture
//!
//! `mixtape-playback` only knows the capability traits from `mixtape-core`:
//! - No dependency on mixtape-storage (database, log file)
//! - Stores and logs are injected by the application
//!
//! # Example
//!
//! ```rust,no_run
//! use mixtape_playback::{MusicService, RemotePlayer};
//! use mixtape_storage::{FileActivityLog, SqliteHistoryStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = MusicService::new(
//!     RemotePlayer::default(),
//!     SqliteHistoryStore::open("mixtape_history.db").await?,
//!     FileActivityLog::open("mixtape_activity.log").await?,
//! );
//!
//! let report = service.play_song("Bohemian Rhapsody").await;
//! for notice in &report.notices {
//!     println!("{notice}");
//! }
//! # Ok(())
//! # }
//! ```

mod catalog;
mod local;
mod player;
mod remote;
mod service;
pub mod types;

// Public exports
pub use catalog::{TrackAsset, TrackCatalog, ARTWORK_EXTENSIONS, AUDIO_EXTENSIONS};
pub use local::LocalPlayer;
pub use player::ConfiguredPlayer;
pub use remote::RemotePlayer;
pub use service::MusicService;
pub use types::{PlayOutcome, PlayReport, PlayerConfig, PlayerKind, Stage};
