//! End-to-end tests for the play-song sequence
//!
//! Real SQLite files and log files live in a temp directory; failure paths use
//! small in-test doubles.

use async_trait::async_trait;
use mixtape_core::{
    ActivityLog, HistoryStore, LogEntry, MixtapeError, NoticeLevel, PlayRecord, Playback,
    Player, Result,
};
use mixtape_playback::{LocalPlayer, MusicService, PlayOutcome, RemotePlayer, Stage, TrackCatalog};
use mixtape_storage::activity_log::BANNER;
use mixtape_storage::{FileActivityLog, HistoryBackend, SqliteHistoryStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tempfile::TempDir;

struct Fixture {
    store: SqliteHistoryStore,
    log: FileActivityLog,
    _temp_dir: TempDir,
}

async fn fixture() -> Fixture {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = SqliteHistoryStore::open(temp_dir.path().join("history.db"))
        .await
        .expect("Failed to open history store");
    let log = FileActivityLog::open(temp_dir.path().join("activity.log"))
        .await
        .expect("Failed to open activity log");
    Fixture {
        store,
        log,
        _temp_dir: temp_dir,
    }
}

/// Store whose writes always fail
struct FailingStore;

#[async_trait]
impl HistoryStore for FailingStore {
    async fn save(&self, _title: &str) -> Result<PlayRecord> {
        Err(MixtapeError::persistence("disk full"))
    }

    async fn list(&self) -> Result<Vec<PlayRecord>> {
        Ok(Vec::new())
    }

    async fn clear(&self) -> Result<u64> {
        Err(MixtapeError::persistence("disk full"))
    }
}

/// Player that crashes
struct BrokenPlayer;

impl Player for BrokenPlayer {
    fn play(&self, _title: &str) -> Result<Playback> {
        Err(MixtapeError::playback("audio device lost"))
    }
}

/// Log that cannot be written
struct ReadOnlyLog;

#[async_trait]
impl ActivityLog for ReadOnlyLog {
    async fn log(&self, _message: &str) -> Result<LogEntry> {
        Err(MixtapeError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only file system",
        )))
    }

    async fn read_lines(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn clear(&self) -> Result<bool> {
        Ok(false)
    }

    fn location(&self) -> String {
        "/readonly/activity.log".to_string()
    }
}

/// Log that accepts a fixed number of writes, then fails
struct ExhaustedLog {
    remaining: AtomicUsize,
}

impl ExhaustedLog {
    fn allowing(writes: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(writes),
        }
    }
}

#[async_trait]
impl ActivityLog for ExhaustedLog {
    async fn log(&self, message: &str) -> Result<LogEntry> {
        let allowed = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if !allowed {
            return Err(MixtapeError::Io(std::io::Error::other(
                "no space left on device",
            )));
        }
        Ok(LogEntry::new(mixtape_core::types::now_micros(), message))
    }

    async fn read_lines(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn clear(&self) -> Result<bool> {
        Ok(false)
    }

    fn location(&self) -> String {
        "/full/activity.log".to_string()
    }
}

/// In-memory log, to see exactly what was written
#[derive(Default)]
struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

#[async_trait]
impl ActivityLog for MemoryLog {
    async fn log(&self, message: &str) -> Result<LogEntry> {
        let entry = LogEntry::new(mixtape_core::types::now_micros(), message);
        self.lines.lock().unwrap().push(entry.message.clone());
        Ok(entry)
    }

    async fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.lock().unwrap().clone())
    }

    async fn clear(&self) -> Result<bool> {
        let mut lines = self.lines.lock().unwrap();
        let had_lines = !lines.is_empty();
        lines.clear();
        Ok(had_lines)
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[tokio::test]
async fn test_successful_play_logs_records_and_logs() {
    let f = fixture().await;
    let service = MusicService::new(RemotePlayer::default(), f.store, f.log);

    let report = service.play_song("Bohemian Rhapsody").await;
    assert!(report.is_completed());
    assert_eq!(report.record().unwrap().title, "Bohemian Rhapsody");

    let lines = service.activity().await.unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], BANNER);
    assert!(lines[1].ends_with("] Starting playback: Bohemian Rhapsody"));
    assert!(lines[2].ends_with("] Playback of 'Bohemian Rhapsody' completed and recorded."));

    let history = service.history().await.unwrap();
    assert_eq!(history, vec![report.record().unwrap().clone()]);

    let levels: Vec<NoticeLevel> = report.notices.iter().map(|n| n.level).collect();
    assert_eq!(
        levels,
        vec![
            NoticeLevel::Info,
            NoticeLevel::Info,
            NoticeLevel::Success,
            NoticeLevel::Info
        ]
    );
    assert_eq!(
        report.notices[1].message,
        "Playing: Bohemian Rhapsody on Spotify..."
    );
}

#[tokio::test]
async fn test_failing_store_logs_start_and_error_only() {
    let service = MusicService::new(RemotePlayer::default(), FailingStore, MemoryLog::default());

    let report = service.play_song("Imagine").await;
    match &report.outcome {
        PlayOutcome::Failed {
            stage,
            error,
            record,
        } => {
            assert_eq!(*stage, Stage::Persisting);
            assert!(matches!(error, MixtapeError::Persistence(_)));
            assert!(record.is_none());
        }
        PlayOutcome::Completed { .. } => panic!("play should have failed"),
    }

    let lines = service.activity().await.unwrap();
    assert_eq!(
        lines,
        vec![
            "Starting playback: Imagine".to_string(),
            "Error while playing song: Persistence error: disk full".to_string(),
        ]
    );

    let last = report.notices.last().unwrap();
    assert_eq!(last.level, NoticeLevel::Error);
    assert_eq!(last.message, "An error occurred: Persistence error: disk full");
}

#[tokio::test]
async fn test_unavailable_backend_fails_without_saving() {
    let history = HistoryBackend::Unavailable {
        reason: "Database connection error: connection refused".to_string(),
    };
    let service = MusicService::new(RemotePlayer::default(), history, MemoryLog::default());
    assert!(!service.history_available());

    let report = service.play_song("Imagine").await;
    assert!(!report.is_completed());
    assert!(report.error().unwrap().is_unavailable());

    let lines = service.activity().await.unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("Error while playing song: History store unavailable"));

    assert!(service.history().await.unwrap_err().is_unavailable());
    assert!(service.clear_history().await.unwrap_err().is_unavailable());
}

#[tokio::test]
async fn test_unknown_local_title_warns_but_still_records() {
    let f = fixture().await;
    let service = MusicService::new(LocalPlayer::new(TrackCatalog::new()), f.store, f.log);

    let report = service.play_song("Imagine").await;
    assert!(report.is_completed());
    assert!(report
        .notices
        .iter()
        .any(|n| n.level == NoticeLevel::Warning && n.message.contains("not in catalog")));

    assert_eq!(service.history().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_broken_player_stops_before_persisting() {
    let f = fixture().await;
    let service = MusicService::new(BrokenPlayer, f.store, f.log);

    let report = service.play_song("Imagine").await;
    assert!(matches!(
        report.outcome,
        PlayOutcome::Failed {
            stage: Stage::Playing,
            ..
        }
    ));
    assert!(service.history().await.unwrap().is_empty());

    let lines = service.activity().await.unwrap();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].ends_with("] Error while playing song: Playback failed: audio device lost"));
}

#[tokio::test]
async fn test_unwritable_log_fails_at_start() {
    let f = fixture().await;
    let service = MusicService::new(RemotePlayer::default(), f.store, ReadOnlyLog);

    let report = service.play_song("Imagine").await;
    assert!(matches!(
        report.outcome,
        PlayOutcome::Failed {
            stage: Stage::LoggingStart,
            ..
        }
    ));
    assert!(service.history().await.unwrap().is_empty());

    let messages: Vec<&str> = report.notices.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Activity log unavailable: read-only file system",
            "An error occurred: read-only file system",
        ]
    );
}

#[tokio::test]
async fn test_repeated_plays_are_newest_first() {
    let f = fixture().await;
    let service = MusicService::new(RemotePlayer::default(), f.store, f.log);

    service.play_song("Imagine").await;
    service.play_song("Hey Jude").await;

    let titles: Vec<String> = service
        .history()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["Hey Jude", "Imagine"]);

    // banner + two lines per play
    assert_eq!(service.activity().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_clearing_history_and_activity() {
    let f = fixture().await;
    let service = MusicService::new(RemotePlayer::default(), f.store, f.log);

    service.play_song("Imagine").await;

    assert_eq!(service.clear_history().await.unwrap(), 1);
    assert!(service.history().await.unwrap().is_empty());

    assert!(service.clear_activity().await.unwrap());
    assert!(service.activity().await.unwrap().is_empty());
    assert!(!service.clear_activity().await.unwrap());

    // Both stores keep working after being cleared
    assert!(service.play_song("Let It Be").await.is_completed());
    assert_eq!(service.history().await.unwrap().len(), 1);
    assert_eq!(service.activity().await.unwrap()[0], BANNER);
}

#[tokio::test]
async fn test_completion_log_failure_still_reports_saved_record() {
    let f = fixture().await;
    let service = MusicService::new(RemotePlayer::default(), f.store, ExhaustedLog::allowing(1));

    let report = service.play_song("Imagine").await;
    match &report.outcome {
        PlayOutcome::Failed { stage, record, .. } => {
            assert_eq!(*stage, Stage::LoggingEnd);
            assert_eq!(record.as_ref().unwrap().title, "Imagine");
        }
        PlayOutcome::Completed { .. } => panic!("completion log should have failed"),
    }

    let history = service.history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(report.record(), Some(&history[0]));

    assert!(report
        .notices
        .iter()
        .any(|n| n.message == "Playback history saved."));
    assert_eq!(
        report.notices.last().unwrap().message,
        "An error occurred: no space left on device"
    );
}
