//! Play history on `SQLite`
//!
//! Timestamps are stored as fixed-width ISO-8601 text, so `ORDER BY timestamp`
//! is chronological. Ties are broken by insertion order.
//!
//! # Example
//!
//! ```rust,no_run
//! use mixtape_storage::{create_pool, history, run_migrations};
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("mixtape_history.db").await?;
//! run_migrations(&pool).await?;
//!
//! history::record_play(&pool, "Imagine").await?;
//! let plays = history::recent_plays(&pool).await?;
//! # Ok(())
//! # }
//! ```

use mixtape_core::types::{now_micros, PlayRecord};
use sqlx::{Row, SqlitePool};

use crate::error::{validate_title, Result, StorageError};

/// Insert a play of `title` stamped with the current local time
pub async fn record_play(pool: &SqlitePool, title: &str) -> Result<PlayRecord> {
    validate_title(title)?;
    let record = PlayRecord::new(title, now_micros());

    let result = sqlx::query("INSERT INTO history (song_title, timestamp) VALUES (?, ?)")
        .bind(&record.title)
        .bind(record.timestamp())
        .execute(pool)
        .await?;

    tracing::debug!(
        "Recorded play #{} of '{}'",
        result.last_insert_rowid(),
        record.title
    );
    Ok(record)
}

/// All plays, newest first
pub async fn recent_plays(pool: &SqlitePool) -> Result<Vec<PlayRecord>> {
    let rows = sqlx::query(
        "SELECT song_title, timestamp FROM history ORDER BY timestamp DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| -> Result<PlayRecord> {
            let title: String = row.try_get("song_title")?;
            let raw: String = row.try_get("timestamp")?;
            let played_at = PlayRecord::parse_timestamp(&raw).ok_or_else(|| {
                StorageError::InvalidData(format!("unreadable timestamp '{raw}' for '{title}'"))
            })?;
            Ok(PlayRecord::new(title, played_at))
        })
        .collect()
}

/// Delete every play; the table itself stays
pub async fn clear_plays(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM history").execute(pool).await?;
    tracing::debug!("Cleared {} plays", result.rows_affected());
    Ok(result.rows_affected())
}

/// Number of stored plays
pub async fn count_plays(pool: &SqlitePool) -> Result<i64> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM history")
        .fetch_one(pool)
        .await?;
    Ok(count.0)
}
