//! Core types for players and the play-song sequence

use mixtape_core::{MixtapeError, Notice, PlayRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Which player to wire in at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Remote streaming stub
    #[default]
    Remote,
    /// Pre-registered local assets
    Local,
}

/// Player configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub kind: PlayerKind,

    /// Service name reported by the remote player
    #[serde(default = "default_service")]
    pub service: String,

    /// Directory scanned for local assets
    #[serde(default)]
    pub catalog_dir: Option<PathBuf>,
}

fn default_service() -> String {
    "Spotify".to_string()
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            kind: PlayerKind::default(),
            service: default_service(),
            catalog_dir: None,
        }
    }
}

/// Steps of [`MusicService::play_song`](crate::MusicService::play_song)
///
/// ```text
/// Idle -> LoggingStart -> Playing -> Persisting -> LoggingEnd      (success)
///              \______________\__________\___________-> LoggingError (failure)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Idle,
    LoggingStart,
    Playing,
    Persisting,
    LoggingEnd,
    LoggingError,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::LoggingStart => "logging start",
            Self::Playing => "playing",
            Self::Persisting => "persisting",
            Self::LoggingEnd => "logging completion",
            Self::LoggingError => "logging error",
        };
        f.write_str(name)
    }
}

/// How a play-song request ended
#[derive(Debug)]
pub enum PlayOutcome {
    /// Every step ran; the stored record is attached
    Completed { record: PlayRecord },
    /// A step failed; later steps were skipped
    ///
    /// `record` is set when the failure came after the play was stored.
    Failed {
        stage: Stage,
        error: MixtapeError,
        record: Option<PlayRecord>,
    },
}

/// Everything the caller needs to show after a play-song request
#[derive(Debug)]
pub struct PlayReport {
    pub title: String,
    pub outcome: PlayOutcome,
    /// Messages in the order they were produced
    pub notices: Vec<Notice>,
}

impl PlayReport {
    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, PlayOutcome::Completed { .. })
    }

    /// The stored record, even if a later step failed
    pub fn record(&self) -> Option<&PlayRecord> {
        match &self.outcome {
            PlayOutcome::Completed { record } => Some(record),
            PlayOutcome::Failed { record, .. } => record.as_ref(),
        }
    }

    /// The error, if the request failed
    pub fn error(&self) -> Option<&MixtapeError> {
        match &self.outcome {
            PlayOutcome::Failed { error, .. } => Some(error),
            PlayOutcome::Completed { .. } => None,
        }
    }
}
