/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Schema creation error
    #[error("Migration error: {0}")]
    Migration(String),

    /// A stored value could not be decoded
    #[error("Invalid stored data: {0}")]
    InvalidData(String),

    /// Rejected before reaching the database
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Migration(err.to_string())
    }
}

impl From<StorageError> for mixtape_core::MixtapeError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Connection(msg) => Self::Unavailable(msg),
            StorageError::InvalidInput(msg) => Self::InvalidInput(msg),
            StorageError::Io(io) => Self::Io(io),
            other => Self::Persistence(other.to_string()),
        }
    }
}

/// Reject titles that are empty after trimming
pub(crate) fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(StorageError::InvalidInput(
            "song title must not be empty".to_string(),
        ));
    }
    Ok(())
}
