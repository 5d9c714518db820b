//! Settings file loading.

use noughts::Settings;
use noughts_core::{GameMode, GameSession, Mark};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_settings(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write");
    file
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let settings = Settings::load(dir.path().join("absent.toml")).expect("load");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.log_file(), &PathBuf::from("noughts.log"));
    assert_eq!(*settings.session().mode(), GameMode::Human);
}

#[test]
fn test_full_file() {
    let file = write_settings(
        r#"
log_file = "game.log"

[session]
x_name = "Ada"
o_name = "Grace"
ai_name = "Deep Thought"
mode = "ai"
"#,
    );
    let settings = Settings::load(file.path()).expect("load");
    assert_eq!(settings.log_file(), &PathBuf::from("game.log"));
    assert_eq!(settings.session().x_name(), "Ada");
    assert_eq!(*settings.session().mode(), GameMode::Ai);

    let session = GameSession::new(settings.session().clone());
    assert_eq!(session.registry().name(Mark::X), "Ada");
    assert_eq!(session.registry().name(Mark::O), "Deep Thought");
}

#[test]
fn test_partial_file_fills_defaults() {
    let file = write_settings("[session]\nx_name = \"Ada\"\n");
    let settings = Settings::load(file.path()).expect("load");
    assert_eq!(settings.session().x_name(), "Ada");
    assert_eq!(settings.session().o_name(), "Player 2");
    assert_eq!(settings.log_file(), &PathBuf::from("noughts.log"));
}

#[test]
fn test_invalid_mode_is_an_error() {
    let file = write_settings("[session]\nmode = \"telepathy\"\n");
    let err = Settings::load(file.path()).expect_err("bad mode");
    assert!(err.message.starts_with("Failed to parse settings"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_malformed_toml_is_an_error() {
    let file = write_settings("log_file = ");
    assert!(Settings::load(file.path()).is_err());
}
