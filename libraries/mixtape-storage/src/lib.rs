//! Mixtape Storage
//!
//! Persistence for Mixtape: play history (SQLite or MySQL) and the
//! append-only activity log.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: `history` owns the SQLite queries, `mysql` the MySQL ones
//! - **Degrade, don't crash**: [`HistoryBackend::connect`] never fails; an
//!   unreachable backend becomes [`HistoryBackend::Unavailable`]
//! - **Single writer**: one pooled connection per store, one append per log line
//!
//! # Example
//!
//! ```rust,no_run
//! use mixtape_core::HistoryStore;
//! use mixtape_storage::SqliteHistoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteHistoryStore::open("mixtape_history.db").await?;
//! store.save("Imagine").await?;
//!
//! for record in store.list().await? {
//!     println!("{record}");
//! }
//! # Ok(())
//! # }
//! ```

mod backend;
mod context;
mod error;

// Vertical slices
pub mod activity_log;
pub mod history;
pub mod mysql;
pub mod schema;

pub use activity_log::FileActivityLog;
pub use backend::{BackendKind, HistoryBackend, HistoryConfig, MySqlSettings};
pub use context::SqliteHistoryStore;
pub use error::StorageError;
pub use mysql::MySqlHistoryStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;
use std::path::Path;

// Embed migrations into binary
static SQLITE_MIGRATOR: Migrator = sqlx::migrate!("./migrations/sqlite");

/// Bring the history schema up to date
///
/// Applied migrations are recorded in `_sqlx_migrations`, so each one runs
/// once per database file.
///
/// # Errors
///
/// Returns an error if a migration fails or an applied one was modified
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    SQLITE_MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool for a database file
///
/// The file is created if missing. The pool holds a single connection since
/// the history table assumes one writer.
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

    let path = path.as_ref();
    tracing::debug!("Creating SQLite pool for {}", path.display());

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    tracing::debug!("SQLite pool ready");

    Ok(pool)
}
