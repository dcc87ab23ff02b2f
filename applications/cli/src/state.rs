/// Wiring of the configured player, history store and activity log
use crate::config::AppConfig;
use crate::error::Result;
use mixtape_playback::{ConfiguredPlayer, MusicService};
use mixtape_storage::{FileActivityLog, HistoryBackend};

/// The service as wired by the CLI
pub type Service = MusicService<ConfiguredPlayer, HistoryBackend, FileActivityLog>;

/// Application state for one invocation
pub struct AppState {
    pub service: Service,
}

impl AppState {
    /// Build every component from configuration
    ///
    /// An unreachable history store does not fail startup; it is wired in
    /// as unavailable and reported on use.
    pub async fn build(config: &AppConfig) -> Result<Self> {
        let player = ConfiguredPlayer::from_config(&config.player)?;
        let history = HistoryBackend::connect(&config.history).await;
        let log = FileActivityLog::open(&config.activity.path).await?;

        tracing::info!(
            "Wired {:?} player, {} history store, activity log at {}",
            config.player.kind,
            history.label(),
            config.activity.path.display()
        );

        Ok(Self {
            service: MusicService::new(player, history, log),
        })
    }
}
