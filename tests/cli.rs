//! Command-line integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn secure_verify(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("secure-verify").unwrap();
    cmd.env("SECURE_VERIFY_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    secure_verify(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--debug"));
}

#[test]
fn test_config_shows_defaults_without_writing() {
    let dir = TempDir::new().unwrap();
    secure_verify(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      false"))
        .stdout(predicate::str::contains("Test code:        123456"))
        .stdout(predicate::str::contains("Resend cooldown:  60 s"));

    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn test_init_writes_settings() {
    let dir = TempDir::new().unwrap();
    secure_verify(&dir).arg("init").assert().success();

    let contents = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["verification"]["mock_code"], "123456");
    assert_eq!(json["ui"]["tick_rate_ms"], 250);

    secure_verify(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:      true"));
}

#[test]
fn test_invalid_settings_are_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "verification": { "mock_code": "12ab" } }"#,
    )
    .unwrap();

    secure_verify(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("mock_code"));
}
