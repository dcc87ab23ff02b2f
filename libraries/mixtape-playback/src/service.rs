//! Play-song orchestration
//!
//! [`MusicService`] depends only on the three capability traits; concrete
//! players, stores and logs are injected at construction.

use mixtape_core::{ActivityLog, HistoryStore, Notice, PlayRecord, Playback, Player, Result};

use crate::types::{PlayOutcome, PlayReport, Stage};

/// Sequences log -> play -> persist -> log for one song
pub struct MusicService<P, H, L> {
    player: P,
    history: H,
    log: L,
}

impl<P, H, L> MusicService<P, H, L>
where
    P: Player,
    H: HistoryStore,
    L: ActivityLog,
{
    pub fn new(player: P, history: H, log: L) -> Self {
        Self {
            player,
            history,
            log,
        }
    }

    pub fn history_store(&self) -> &H {
        &self.history
    }

    pub fn activity_log(&self) -> &L {
        &self.log
    }

    /// Play a song and record it
    ///
    /// Never returns an error: failures are logged, turned into an error
    /// notice and reported through [`PlayOutcome::Failed`]. Steps already
    /// done are not undone, so a start line without a completion line is the
    /// normal trace of a failed request.
    pub async fn play_song(&self, title: &str) -> PlayReport {
        let mut notices = Vec::new();
        let mut stage = Stage::Idle;
        let mut saved = None;

        let outcome = match self.run(title, &mut stage, &mut saved, &mut notices).await {
            Ok(record) => {
                tracing::info!("Played and recorded '{}'", title);
                PlayOutcome::Completed { record }
            }
            Err(error) => {
                let failed_at = stage;
                tracing::warn!("Playing '{}' failed while {}: {}", title, failed_at, error);

                stage = Stage::LoggingError;
                let line = format!("Error while playing song: {error}");
                if let Err(log_error) = self.log_line(&line, &mut notices).await {
                    tracing::error!("Could not write error to activity log: {}", log_error);
                    notices.push(Notice::error(format!(
                        "Activity log unavailable: {log_error}"
                    )));
                }
                notices.push(Notice::error(format!("An error occurred: {error}")));

                PlayOutcome::Failed {
                    stage: failed_at,
                    error,
                    record: saved,
                }
            }
        };
        tracing::debug!("play_song('{}') finished in stage {}", title, stage);

        PlayReport {
            title: title.to_string(),
            outcome,
            notices,
        }
    }

    async fn run(
        &self,
        title: &str,
        stage: &mut Stage,
        saved: &mut Option<PlayRecord>,
        notices: &mut Vec<Notice>,
    ) -> Result<PlayRecord> {
        *stage = Stage::LoggingStart;
        self.log_line(&format!("Starting playback: {title}"), notices)
            .await?;

        *stage = Stage::Playing;
        let playback = self.player.play(title)?;
        if let Playback::Unavailable { reason, .. } = &playback {
            tracing::warn!("Continuing without audio for '{}': {}", title, reason);
        }
        notices.push(playback.notice());

        *stage = Stage::Persisting;
        self.history.check_available()?;
        let record = self.history.save(title).await?;
        notices.push(Notice::success("Playback history saved."));
        *saved = Some(record.clone());

        *stage = Stage::LoggingEnd;
        self.log_line(
            &format!("Playback of '{title}' completed and recorded."),
            notices,
        )
        .await?;

        Ok(record)
    }

    async fn log_line(&self, message: &str, notices: &mut Vec<Notice>) -> Result<()> {
        self.log.log(message).await?;
        notices.push(Notice::info(format!(
            "Log saved to '{}'",
            self.log.location()
        )));
        Ok(())
    }

    /// Whether the history store was reachable at startup
    pub fn history_available(&self) -> bool {
        self.history.check_available().is_ok()
    }

    /// Play history, newest first
    pub async fn history(&self) -> Result<Vec<PlayRecord>> {
        self.history.list().await
    }

    /// Delete all play history. Returns the number of records removed.
    pub async fn clear_history(&self) -> Result<u64> {
        let removed = self.history.clear().await?;
        tracing::info!("Cleared {} history records", removed);
        Ok(removed)
    }

    /// Raw activity log lines, banner included
    pub async fn activity(&self) -> Result<Vec<String>> {
        self.log.read_lines().await
    }

    /// Delete the activity log. `false` if it did not exist.
    pub async fn clear_activity(&self) -> Result<bool> {
        self.log.clear().await
    }
}

impl<P, H, L> std::fmt::Debug for MusicService<P, H, L>
where
    L: ActivityLog,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MusicService")
            .field("log", &self.log.location())
            .finish_non_exhaustive()
    }
}
