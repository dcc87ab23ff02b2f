/// Application configuration
use crate::error::{CliError, Result};
use mixtape_playback::{PlayerConfig, PlayerKind};
use mixtape_storage::{BackendKind, HistoryConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "mixtape.toml";

/// Prefix of environment overrides, e.g. `MIXTAPE_HISTORY__BACKEND=mysql`
pub const ENV_PREFIX: &str = "MIXTAPE";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub activity: ActivitySettings,

    #[serde(default)]
    pub player: PlayerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActivitySettings {
    #[serde(default = "default_activity_path")]
    pub path: PathBuf,
}

impl Default for ActivitySettings {
    fn default() -> Self {
        Self {
            path: default_activity_path(),
        }
    }
}

fn default_activity_path() -> PathBuf {
    PathBuf::from("mixtape_activity.log")
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `mixtape.toml` is read if
    /// present. `MIXTAPE_*` variables override both.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Self::build(settings)
    }

    /// Parse configuration from TOML text, without environment overrides
    pub fn from_toml(contents: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml));
        Self::build(settings)
    }

    fn build(settings: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.history.backend == BackendKind::Mysql && !self.history.mysql.is_configured() {
            return Err(CliError::Config(
                "mysql backend needs history.mysql.url or history.mysql.host + database \
                 (set MIXTAPE_HISTORY__MYSQL__URL)"
                    .to_string(),
            ));
        }

        if self.player.kind == PlayerKind::Local && self.player.catalog_dir.is_none() {
            return Err(CliError::Config(
                "local player needs player.catalog_dir (set MIXTAPE_PLAYER__CATALOG_DIR)"
                    .to_string(),
            ));
        }

        if self.activity.path.as_os_str().is_empty() {
            return Err(CliError::Config("activity.path must not be empty".to_string()));
        }

        Ok(())
    }
}
