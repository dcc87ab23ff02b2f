//! Remote streaming player stub
//!
//! No audio is produced; the player only reports that the service started.

use mixtape_core::{Playback, PlaybackSource, Player, Result};

/// Player for a remote streaming service
#[derive(Debug, Clone)]
pub struct RemotePlayer {
    service: String,
}

impl RemotePlayer {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

impl Default for RemotePlayer {
    fn default() -> Self {
        Self::new("Spotify")
    }
}

impl Player for RemotePlayer {
    fn play(&self, title: &str) -> Result<Playback> {
        tracing::info!("Streaming '{}' on {}", title, self.service);
        Ok(Playback::Started {
            title: title.to_string(),
            source: PlaybackSource::Remote {
                service: self.service.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_starts() {
        let player = RemotePlayer::default();
        let playback = player.play("Anything At All").unwrap();
        assert_eq!(
            playback,
            Playback::Started {
                title: "Anything At All".to_string(),
                source: PlaybackSource::Remote {
                    service: "Spotify".to_string()
                },
            }
        );
    }

    #[test]
    fn test_custom_service() {
        let player = RemotePlayer::new("Deezer");
        assert_eq!(player.service(), "Deezer");
        assert!(player.play("x").unwrap().notice().message.ends_with("on Deezer..."));
    }
}
