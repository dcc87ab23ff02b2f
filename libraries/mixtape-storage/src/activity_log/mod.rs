//! Append-only activity log file
//!
//! One `[<timestamp>] <message>` line per entry, preceded by a fixed banner.
//! The banner is written whenever the file is (re)created, including after
//! [`FileActivityLog::clear`].
//!
//! # Example
//!
//! ```rust,no_run
//! use mixtape_core::ActivityLog;
//! use mixtape_storage::FileActivityLog;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let log = FileActivityLog::open("mixtape_activity.log").await?;
//! log.log("Starting playback: Imagine").await?;
//!
//! for line in log.read_lines().await? {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use mixtape_core::types::{now_micros, LogEntry};
use mixtape_core::ActivityLog;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::error::Result;

/// First line of every activity log file
pub const BANNER: &str = "--- Mixtape Activity Log ---";

/// Activity log stored in a flat UTF-8 file
#[derive(Debug, Clone)]
pub struct FileActivityLog {
    path: PathBuf,
}

impl FileActivityLog {
    /// Use `path` as the log, creating it with the banner if absent
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let log = Self { path: path.into() };
        log.append(None).await?;
        Ok(log)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry
    pub async fn write_entry(&self, entry: &LogEntry) -> Result<()> {
        self.append(Some(&entry.to_line())).await
    }

    /// Whole file as lines, banner included; empty if the file is gone
    pub async fn read_lines(&self) -> Result<Vec<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(contents.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parsed entries, banner and unparseable lines skipped
    pub async fn entries(&self) -> Result<Vec<LogEntry>> {
        Ok(self
            .read_lines()
            .await?
            .iter()
            .filter_map(|line| LogEntry::parse_line(line))
            .collect())
    }

    /// Delete the log file. Returns `false` if there was nothing to delete.
    pub async fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::info!("Deleted activity log {}", self.path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn append(&self, line: Option<&str>) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let mut buffer = String::new();
        if file.metadata().await?.len() == 0 {
            buffer.push_str(BANNER);
            buffer.push('\n');
        }
        if let Some(line) = line {
            buffer.push_str(line);
            buffer.push('\n');
        }

        if !buffer.is_empty() {
            file.write_all(buffer.as_bytes()).await?;
            file.flush().await?;
        }
        Ok(())
    }
}

/// Collapse line breaks so one message is always one line
fn single_line(message: &str) -> String {
    message
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl ActivityLog for FileActivityLog {
    async fn log(&self, message: &str) -> mixtape_core::Result<LogEntry> {
        let entry = LogEntry::new(now_micros(), single_line(message));
        self.write_entry(&entry).await?;
        Ok(entry)
    }

    async fn read_lines(&self) -> mixtape_core::Result<Vec<String>> {
        Ok(FileActivityLog::read_lines(self).await?)
    }

    async fn clear(&self) -> mixtape_core::Result<bool> {
        Ok(FileActivityLog::clear(self).await?)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("plain"), "plain");
        assert_eq!(single_line("first\r\nsecond\nthird"), "first second third");
    }
}
