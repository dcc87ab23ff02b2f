/// Backend selection and the degraded "unavailable" state
use async_trait::async_trait;
use mixtape_core::{HistoryStore, MixtapeError, PlayRecord};
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlConnectOptions;
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::StorageError;
use crate::{MySqlHistoryStore, SqliteHistoryStore};

/// Which history backend to wire in at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Sqlite,
    Mysql,
}

/// Connection details for the MySQL backend
///
/// Either `url` or the host/user/password/database tuple is used; `url` wins
/// when both are present.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MySqlSettings {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
}

impl MySqlSettings {
    /// Whether enough is set to attempt a connection
    pub fn is_configured(&self) -> bool {
        self.url.is_some() || (self.host.is_some() && self.database.is_some())
    }

    fn connect_options(&self) -> Result<MySqlConnectOptions, StorageError> {
        use std::str::FromStr;

        if let Some(url) = &self.url {
            return MySqlConnectOptions::from_str(url)
                .map_err(|e| StorageError::Connection(e.to_string()));
        }

        let (Some(host), Some(database)) = (&self.host, &self.database) else {
            return Err(StorageError::Connection(
                "no MySQL url or host/database configured".to_string(),
            ));
        };

        let mut options = MySqlConnectOptions::new().host(host).database(database);
        if let Some(port) = self.port {
            options = options.port(port);
        }
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }
}

/// History store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryConfig {
    #[serde(default)]
    pub backend: BackendKind,

    #[serde(default = "default_sqlite_path")]
    pub sqlite_path: PathBuf,

    #[serde(default)]
    pub mysql: MySqlSettings,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_sqlite_path() -> PathBuf {
    PathBuf::from("mixtape_history.db")
}

fn default_connect_timeout_secs() -> u64 {
    5
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            sqlite_path: default_sqlite_path(),
            mysql: MySqlSettings::default(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl HistoryConfig {
    /// `SQLite` configuration for a specific file
    pub fn sqlite(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: BackendKind::Sqlite,
            sqlite_path: path.into(),
            ..Self::default()
        }
    }

    /// MySQL configuration for a connection URL
    pub fn mysql_url(url: impl Into<String>) -> Self {
        Self {
            backend: BackendKind::Mysql,
            mysql: MySqlSettings {
                url: Some(url.into()),
                ..MySqlSettings::default()
            },
            ..Self::default()
        }
    }

    fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.max(1))
    }
}

/// The history store wired in at startup
///
/// A backend that cannot be reached is kept as `Unavailable` instead of
/// aborting startup; every operation on it reports the same reason.
#[derive(Debug)]
pub enum HistoryBackend {
    Sqlite(SqliteHistoryStore),
    MySql(MySqlHistoryStore),
    Unavailable { reason: String },
}

impl HistoryBackend {
    /// Connect the configured backend
    ///
    /// Never fails; connection and schema errors yield `Unavailable`.
    pub async fn connect(config: &HistoryConfig) -> Self {
        let connected = match config.backend {
            BackendKind::Sqlite => SqliteHistoryStore::open(&config.sqlite_path)
                .await
                .map(Self::Sqlite),
            BackendKind::Mysql => match config.mysql.connect_options() {
                Ok(options) => MySqlHistoryStore::connect_with(options, config.connect_timeout())
                    .await
                    .map(Self::MySql),
                Err(e) => Err(e),
            },
        };

        match connected {
            Ok(backend) => {
                tracing::info!("History store ready ({})", backend.label());
                backend
            }
            Err(e) => {
                tracing::error!("History store unavailable, continuing without it: {}", e);
                Self::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable { .. })
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            Self::Unavailable { reason } => Some(reason),
            _ => None,
        }
    }

    /// Short name for logs and notices
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::MySql(_) => "mysql",
            Self::Unavailable { .. } => "unavailable",
        }
    }

    /// The `SQLite` pool, when that backend is active
    pub fn sqlite_pool(&self) -> Option<&SqlitePool> {
        match self {
            Self::Sqlite(store) => Some(store.pool()),
            _ => None,
        }
    }

    fn unavailable(reason: &str) -> MixtapeError {
        MixtapeError::unavailable(reason)
    }
}

#[async_trait]
impl HistoryStore for HistoryBackend {
    async fn save(&self, title: &str) -> mixtape_core::Result<PlayRecord> {
        match self {
            Self::Sqlite(store) => store.save(title).await,
            Self::MySql(store) => store.save(title).await,
            Self::Unavailable { reason } => Err(Self::unavailable(reason)),
        }
    }

    async fn list(&self) -> mixtape_core::Result<Vec<PlayRecord>> {
        match self {
            Self::Sqlite(store) => store.list().await,
            Self::MySql(store) => store.list().await,
            Self::Unavailable { reason } => Err(Self::unavailable(reason)),
        }
    }

    async fn clear(&self) -> mixtape_core::Result<u64> {
        match self {
            Self::Sqlite(store) => store.clear().await,
            Self::MySql(store) => store.clear().await,
            Self::Unavailable { reason } => Err(Self::unavailable(reason)),
        }
    }

    fn check_available(&self) -> mixtape_core::Result<()> {
        match self {
            Self::Unavailable { reason } => Err(Self::unavailable(reason)),
            _ => Ok(()),
        }
    }
}
