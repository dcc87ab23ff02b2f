use crate::error::Result;
use crate::{create_pool, history, run_migrations};
use async_trait::async_trait;
use mixtape_core::{HistoryStore, PlayRecord};
use sqlx::SqlitePool;
use std::path::Path;

/// History store backed by a single `SQLite` file
#[derive(Debug, Clone)]
pub struct SqliteHistoryStore {
    pool: SqlitePool,
}

impl SqliteHistoryStore {
    /// Open (or create) the database file and make sure the table exists
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let pool = create_pool(path).await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, creating the table if needed
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl HistoryStore for SqliteHistoryStore {
    async fn save(&self, title: &str) -> mixtape_core::Result<PlayRecord> {
        Ok(history::record_play(&self.pool, title).await?)
    }

    async fn list(&self) -> mixtape_core::Result<Vec<PlayRecord>> {
        Ok(history::recent_plays(&self.pool).await?)
    }

    async fn clear(&self) -> mixtape_core::Result<u64> {
        Ok(history::clear_plays(&self.pool).await?)
    }
}
