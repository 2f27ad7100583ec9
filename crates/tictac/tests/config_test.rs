//! Tests for loading session config files from disk.

use std::fs;
use tempfile::TempDir;

use tictac::{PlayerKind, SessionConfig};
use tictac_engine::Tier;

/// Writes `content` to a config file inside `dir` and returns its path.
fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("tictac.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_loads_full_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"x = "advanced"
o = "simple"
games = 10
delay_ms = 0
seed = 99
"#,
    );

    let config = SessionConfig::from_file(&path).unwrap();
    assert_eq!(*config.x(), PlayerKind::Advanced);
    assert_eq!(*config.o(), PlayerKind::Simple);
    assert_eq!(*config.games(), 10);
    assert_eq!(*config.delay_ms(), 0);
    assert_eq!(*config.seed(), Some(99));

    let (seat_x, seat_o) = config.seats();
    assert_eq!(seat_x.tier(), Some(Tier::Advanced));
    assert_eq!(seat_o.tier(), Some(Tier::Simple));
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "o = \"random\"\n");

    let config = SessionConfig::from_file(&path).unwrap();
    assert_eq!(*config.x(), PlayerKind::Human);
    assert_eq!(*config.o(), PlayerKind::Random);
    assert_eq!(*config.games(), 1);
    assert_eq!(*config.delay_ms(), 1000);
    assert!(config.seats().0.is_human());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "games = \"many\"\n");
    let err = SessionConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_flags_override_file_values() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "x = \"simple\"\ngames = 4\n");

    let config = SessionConfig::from_file(&path)
        .unwrap()
        .with_x(PlayerKind::Human)
        .with_games(2);
    assert_eq!(*config.x(), PlayerKind::Human);
    assert_eq!(*config.games(), 2);
    assert!(config.has_human());
}
