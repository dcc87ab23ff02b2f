/// Core error types for Mixtape
use thiserror::Error;

/// Result type alias using `MixtapeError`
pub type Result<T> = std::result::Result<T, MixtapeError>;

/// Core error type for Mixtape
#[derive(Error, Debug)]
pub enum MixtapeError {
    /// A backend could not be reached when it was constructed.
    ///
    /// Every later call against the same backend reports this again.
    #[error("History store unavailable: {0}")]
    Unavailable(String),

    /// The player failed outright (a missing asset is not a failure)
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// A write, read or delete statement failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MixtapeError {
    /// Create an unavailable-backend error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a playback error
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::PlaybackFailed(msg.into())
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error comes from a degraded backend
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for MixtapeError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}
