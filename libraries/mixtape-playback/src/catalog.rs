//! Pre-registered local tracks
//!
//! Titles are matched case-insensitively after trimming, so "imagine " and
//! "Imagine" resolve to the same asset.

use mixtape_core::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Audio file extensions picked up by [`TrackCatalog::from_dir`]
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "wav", "m4a"];

/// Artwork extensions looked up next to an audio file, in order
pub const ARTWORK_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// A local audio file and its cover art
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackAsset {
    /// Title as registered
    pub title: String,
    pub audio: PathBuf,
    pub artwork: Option<PathBuf>,
}

/// Title -> asset lookup table
#[derive(Debug, Clone, Default)]
pub struct TrackCatalog {
    tracks: BTreeMap<String, TrackAsset>,
}

impl TrackCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a track
    pub fn register(
        &mut self,
        title: impl Into<String>,
        audio: impl Into<PathBuf>,
        artwork: Option<PathBuf>,
    ) {
        let title = title.into();
        let asset = TrackAsset {
            title: title.clone(),
            audio: audio.into(),
            artwork,
        };
        self.tracks.insert(catalog_key(&title), asset);
    }

    /// Find the asset for a title
    pub fn lookup(&self, title: &str) -> Option<&TrackAsset> {
        self.tracks.get(&catalog_key(title))
    }

    /// Registered titles, sorted
    pub fn titles(&self) -> Vec<&str> {
        self.tracks.values().map(|t| t.title.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Build a catalog from the audio files directly inside `dir`
    ///
    /// The file stem is the title; `<stem>.jpg` (or `.jpeg`/`.png`) next to
    /// it becomes the artwork. Subdirectories are not scanned.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut catalog = Self::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || !has_extension(&path, AUDIO_EXTENSIONS) {
                continue;
            }
            let Some(title) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let artwork = ARTWORK_EXTENSIONS
                .iter()
                .map(|ext| path.with_extension(ext))
                .find(|candidate| candidate.is_file());

            catalog.register(title.to_string(), path.clone(), artwork);
        }

        tracing::info!(
            "Loaded {} local tracks from {}",
            catalog.len(),
            dir.display()
        );
        Ok(catalog)
    }
}

fn catalog_key(title: &str) -> String {
    title.trim().to_lowercase()
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
