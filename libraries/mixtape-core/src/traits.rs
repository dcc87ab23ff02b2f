/// Core traits for Mixtape
use crate::error::Result;
use crate::types::{LogEntry, PlayRecord, Playback};
use async_trait::async_trait;

/// Player trait
///
/// Implementers perform playback for a track title. Playback itself is a
/// side effect; the returned [`Playback`] only describes what happened.
///
/// A title that cannot be resolved is reported as [`Playback::Unavailable`],
/// not as an error. `Err` is reserved for failures of the player itself.
pub trait Player: Send + Sync {
    /// Start playing the given title
    ///
    /// # Errors
    /// Returns an error if the player fails outright
    fn play(&self, title: &str) -> Result<Playback>;
}

/// History store trait
///
/// Implementers persist one [`PlayRecord`] per completed play and return
/// them newest first.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append a play record for `title`, stamped with the current time
    async fn save(&self, title: &str) -> Result<PlayRecord>;

    /// All records ordered by timestamp descending
    async fn list(&self) -> Result<Vec<PlayRecord>>;

    /// Delete every record, keeping the table. Returns the number removed.
    async fn clear(&self) -> Result<u64>;

    /// Fails with [`MixtapeError::Unavailable`] if the store could not be
    /// reached when it was set up
    ///
    /// [`MixtapeError::Unavailable`]: crate::MixtapeError::Unavailable
    fn check_available(&self) -> Result<()> {
        Ok(())
    }
}

/// Activity log trait
///
/// Append-only text log of what the application did.
#[async_trait]
pub trait ActivityLog: Send + Sync {
    /// Append one timestamped line
    async fn log(&self, message: &str) -> Result<LogEntry>;

    /// Every line currently in the log, oldest first
    async fn read_lines(&self) -> Result<Vec<String>>;

    /// Delete the whole log. Returns `false` if there was nothing to delete.
    async fn clear(&self) -> Result<bool>;

    /// Human-readable location of the log (shown to users)
    fn location(&self) -> String;
}
