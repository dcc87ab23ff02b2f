//! Local asset player
//!
//! Resolves a title against a [`TrackCatalog`]. An unknown title or a missing
//! audio file is a warning, never an error.

use mixtape_core::{Playback, PlaybackSource, Player, Result};

use crate::catalog::TrackCatalog;

/// Player for pre-registered local audio files
#[derive(Debug, Clone, Default)]
pub struct LocalPlayer {
    catalog: TrackCatalog,
}

impl LocalPlayer {
    pub fn new(catalog: TrackCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &TrackCatalog {
        &self.catalog
    }
}

impl Player for LocalPlayer {
    fn play(&self, title: &str) -> Result<Playback> {
        let Some(asset) = self.catalog.lookup(title) else {
            tracing::warn!("'{}' is not in the local catalog", title);
            return Ok(Playback::Unavailable {
                title: title.to_string(),
                reason: "not in catalog".to_string(),
            });
        };

        if !asset.audio.is_file() {
            tracing::warn!("Audio file for '{}' is missing: {}", title, asset.audio.display());
            return Ok(Playback::Unavailable {
                title: title.to_string(),
                reason: format!("audio file missing: {}", asset.audio.display()),
            });
        }

        let artwork = match &asset.artwork {
            Some(path) if path.is_file() => Some(path.clone()),
            Some(path) => {
                tracing::warn!("Artwork for '{}' is missing: {}", title, path.display());
                None
            }
            None => None,
        };

        tracing::info!("Playing '{}' from {}", asset.title, asset.audio.display());
        Ok(Playback::Started {
            title: title.to_string(),
            source: PlaybackSource::Local {
                audio: asset.audio.clone(),
                artwork,
            },
        })
    }
}
