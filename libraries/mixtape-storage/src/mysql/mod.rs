//! Play history on a networked MySQL server
//!
//! Same contract as the `SQLite` slice. The timestamp column is a native
//! `DATETIME(6)`, bound and decoded as `chrono::NaiveDateTime`.

use async_trait::async_trait;
use mixtape_core::types::{now_micros, PlayRecord};
use mixtape_core::HistoryStore;
use sqlx::migrate::Migrator;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::Row;
use std::time::Duration;

use crate::error::{validate_title, Result, StorageError};

static MYSQL_MIGRATOR: Migrator = sqlx::migrate!("./migrations/mysql");

/// History store backed by a MySQL table
#[derive(Debug, Clone)]
pub struct MySqlHistoryStore {
    pool: MySqlPool,
}

impl MySqlHistoryStore {
    /// Connect with explicit options and create the table if needed
    ///
    /// Any failure here is reported as [`StorageError::Connection`].
    pub async fn connect_with(options: MySqlConnectOptions, timeout: Duration) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(timeout)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        ensure_table(&pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

/// Bring the MySQL history schema up to date
pub async fn ensure_table(pool: &MySqlPool) -> Result<()> {
    MYSQL_MIGRATOR.run(pool).await?;
    Ok(())
}

/// Insert a play of `title` stamped with the current local time
pub async fn record_play(pool: &MySqlPool, title: &str) -> Result<PlayRecord> {
    validate_title(title)?;
    let record = PlayRecord::new(title, now_micros());

    sqlx::query("INSERT INTO history (song_title, `timestamp`) VALUES (?, ?)")
        .bind(&record.title)
        .bind(record.played_at)
        .execute(pool)
        .await?;

    tracing::debug!("Recorded play of '{}' on MySQL", record.title);
    Ok(record)
}

/// All plays, newest first
pub async fn recent_plays(pool: &MySqlPool) -> Result<Vec<PlayRecord>> {
    let rows = sqlx::query(
        "SELECT song_title, `timestamp` FROM history ORDER BY `timestamp` DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| -> Result<PlayRecord> {
            Ok(PlayRecord::new(
                row.try_get::<String, _>("song_title")?,
                row.try_get("timestamp")?,
            ))
        })
        .collect()
}

/// Delete every play; the table itself stays
pub async fn clear_plays(pool: &MySqlPool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM history").execute(pool).await?;
    Ok(result.rows_affected())
}

#[async_trait]
impl HistoryStore for MySqlHistoryStore {
    async fn save(&self, title: &str) -> mixtape_core::Result<PlayRecord> {
        Ok(record_play(&self.pool, title).await?)
    }

    async fn list(&self) -> mixtape_core::Result<Vec<PlayRecord>> {
        Ok(recent_plays(&self.pool).await?)
    }

    async fn clear(&self) -> mixtape_core::Result<u64> {
        Ok(clear_plays(&self.pool).await?)
    }
}
