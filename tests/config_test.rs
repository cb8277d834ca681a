//! Configuration file loading.

use std::io::Write;
use tempfile::NamedTempFile;
use tictactoe_ai::Config;
use tictactoe_core::Difficulty;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"hard\"\nseed = 9").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert_eq!(*config.seed(), Some(9));
    assert_eq!(config.log_filter(), "info,tictactoe_core=debug");
}

#[test]
fn test_unknown_difficulty_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"impossible\"").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(*config.difficulty(), Difficulty::Medium);
}

#[test]
fn test_written_config_reloads() {
    let config = Config::default().with_overrides(Some(Difficulty::Easy), Some(5));
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config.to_toml().unwrap().as_bytes()).unwrap();

    assert_eq!(Config::from_file(file.path()).unwrap(), config);
}
