/// Configuration loading and validation tests
use mixtape_cli::{AppConfig, CliError};
use mixtape_playback::PlayerKind;
use mixtape_storage::BackendKind;
use std::path::PathBuf;

#[test]
fn test_empty_config_uses_defaults() {
    let config = AppConfig::from_toml("").unwrap();

    assert_eq!(config.history.backend, BackendKind::Sqlite);
    assert_eq!(config.history.sqlite_path, PathBuf::from("mixtape_history.db"));
    assert_eq!(config.history.connect_timeout_secs, 5);
    assert_eq!(config.activity.path, PathBuf::from("mixtape_activity.log"));
    assert_eq!(config.player.kind, PlayerKind::Remote);
    assert_eq!(config.player.service, "Spotify");
    config.validate().unwrap();
}

#[test]
fn test_full_config_parses() {
    let config = AppConfig::from_toml(
        r#"
        [history]
        backend = "mysql"
        connect_timeout_secs = 2

        [history.mysql]
        host = "db.local"
        port = 3307
        user = "mixtape"
        password = "secret"
        database = "music"

        [activity]
        path = "/var/log/mixtape.log"

        [player]
        kind = "local"
        catalog_dir = "/srv/music"
        "#,
    )
    .unwrap();

    assert_eq!(config.history.backend, BackendKind::Mysql);
    assert_eq!(config.history.connect_timeout_secs, 2);
    assert_eq!(config.history.mysql.host.as_deref(), Some("db.local"));
    assert_eq!(config.history.mysql.port, Some(3307));
    assert_eq!(config.activity.path, PathBuf::from("/var/log/mixtape.log"));
    assert_eq!(config.player.kind, PlayerKind::Local);
    assert_eq!(config.player.catalog_dir, Some(PathBuf::from("/srv/music")));
    config.validate().unwrap();
}

#[test]
fn test_mysql_backend_without_connection_details_is_rejected() {
    let config = AppConfig::from_toml("[history]\nbackend = \"mysql\"\n").unwrap();

    let err = config.validate().unwrap_err();
    assert!(matches!(err, CliError::Config(ref msg) if msg.contains("history.mysql.url")));
}

#[test]
fn test_local_player_without_catalog_is_rejected() {
    let config = AppConfig::from_toml("[player]\nkind = \"local\"\n").unwrap();

    assert!(matches!(config.validate(), Err(CliError::Config(_))));
}

#[test]
fn test_unknown_backend_is_config_error() {
    let err = AppConfig::from_toml("[history]\nbackend = \"postgres\"\n").unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}

#[test]
fn test_load_reads_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[activity]\npath = \"custom.log\"\n").unwrap();

    let config = AppConfig::load(Some(&path)).unwrap();
    assert_eq!(config.activity.path, PathBuf::from("custom.log"));
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    let result = AppConfig::load(Some(&dir.path().join("absent.toml")));
    assert!(matches!(result, Err(CliError::Config(_))));
}
