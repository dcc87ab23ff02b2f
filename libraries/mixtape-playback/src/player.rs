//! Player chosen from configuration

use mixtape_core::{MixtapeError, Playback, Player, Result};

use crate::catalog::TrackCatalog;
use crate::local::LocalPlayer;
use crate::remote::RemotePlayer;
use crate::types::{PlayerConfig, PlayerKind};

/// Either player, picked at startup
#[derive(Debug, Clone)]
pub enum ConfiguredPlayer {
    Remote(RemotePlayer),
    Local(LocalPlayer),
}

impl ConfiguredPlayer {
    /// Build the configured player
    ///
    /// # Errors
    /// `Config` if the local player has no catalog directory, `Io` if the
    /// directory cannot be read
    pub fn from_config(config: &PlayerConfig) -> Result<Self> {
        match config.kind {
            PlayerKind::Remote => Ok(Self::Remote(RemotePlayer::new(config.service.clone()))),
            PlayerKind::Local => {
                let dir = config.catalog_dir.as_ref().ok_or_else(|| {
                    MixtapeError::Config("local player needs player.catalog_dir".to_string())
                })?;
                Ok(Self::Local(LocalPlayer::new(TrackCatalog::from_dir(dir)?)))
            }
        }
    }
}

impl Player for ConfiguredPlayer {
    fn play(&self, title: &str) -> Result<Playback> {
        match self {
            Self::Remote(player) => player.play(title),
            Self::Local(player) => player.play(title),
        }
    }
}
