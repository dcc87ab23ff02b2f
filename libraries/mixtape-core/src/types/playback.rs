/// Player outcomes and user-facing notices
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Where a started playback comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackSource {
    /// A remote streaming service (no local audio)
    Remote {
        /// Service name shown to the user
        service: String,
    },
    /// A pre-registered local asset
    Local {
        /// Audio file
        audio: PathBuf,
        /// Cover art, if registered and present on disk
        artwork: Option<PathBuf>,
    },
}

/// Result of asking a player to play a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playback {
    /// Playback started
    Started {
        /// Requested title
        title: String,
        /// Resolved source
        source: PlaybackSource,
    },
    /// The title could not be played; non-fatal
    Unavailable {
        /// Requested title
        title: String,
        /// Why it could not be played
        reason: String,
    },
}

impl Playback {
    /// Whether playback actually started
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }

    /// Notice describing this outcome
    pub fn notice(&self) -> Notice {
        match self {
            Self::Started {
                title,
                source: PlaybackSource::Remote { service },
            } => Notice::info(format!("Playing: {title} on {service}...")),
            Self::Started {
                title,
                source: PlaybackSource::Local { audio, .. },
            } => Notice::info(format!("Playing: {title} ({})", audio.display())),
            Self::Unavailable { title, reason } => {
                Notice::warning(format!("Cannot play '{title}': {reason}"))
            }
        }
    }
}

/// Severity of a [`Notice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Progress information
    Info,
    /// A step completed
    Success,
    /// Something was skipped but the action went on
    Warning,
    /// The action failed
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Info => "info",
            Self::Success => "ok",
            Self::Warning => "warn",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}

/// A message meant for the person driving the app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Text shown to the user
    pub message: String,
}

impl Notice {
    /// Informational notice
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Info, message)
    }

    /// Success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Success, message)
    }

    /// Warning notice
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Warning, message)
    }

    /// Error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Error, message)
    }

    fn with_level(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Warnings and errors
    pub fn is_problem(&self) -> bool {
        matches!(self.level, NoticeLevel::Warning | NoticeLevel::Error)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_notice() {
        let playback = Playback::Started {
            title: "Bohemian Rhapsody".to_string(),
            source: PlaybackSource::Remote {
                service: "Spotify".to_string(),
            },
        };
        assert!(playback.is_started());
        assert_eq!(
            playback.notice(),
            Notice::info("Playing: Bohemian Rhapsody on Spotify...")
        );
    }

    #[test]
    fn test_unavailable_is_warning() {
        let playback = Playback::Unavailable {
            title: "Nope".to_string(),
            reason: "not in catalog".to_string(),
        };
        let notice = playback.notice();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.is_problem());
        assert_eq!(notice.to_string(), "[warn] Cannot play 'Nope': not in catalog");
    }

    #[test]
    fn test_notice_level_serializes_lowercase() {
        let json = serde_json::to_string(&Notice::success("saved")).unwrap();
        assert_eq!(json, r#"{"level":"success","message":"saved"}"#);
    }
}
