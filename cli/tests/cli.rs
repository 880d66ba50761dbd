//! End-to-end tests for the mimir binary
//!
//! Every test runs in its own temporary working directory, since the
//! settings file lives at a fixed relative path and is created on first
//! run. No test requires a reachable Ollama server: synthesis paths point
//! at an unroutable local port and degrade per the error contract.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn mimir(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mimir").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn read_settings(dir: &TempDir) -> serde_json::Value {
    let content = std::fs::read_to_string(dir.path().join("mimir_config.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Settings pointing every external source into the temp directory, with
/// an unroutable server so chat requests fail fast.
fn write_offline_settings(dir: &TempDir) {
    let settings = serde_json::json!({
        "ollama_url": "http://127.0.0.1:1",
        "timeout_seconds": 1,
        "log_file": dir.path().join("mimir_history.log").to_str().unwrap(),
        "bash_history": dir.path().join("bash_history").to_str().unwrap(),
    });
    std::fs::write(
        dir.path().join("mimir_config.json"),
        serde_json::to_string_pretty(&settings).unwrap(),
    )
    .unwrap();
}

#[test]
fn no_query_and_no_command_prints_help() {
    let dir = tempdir().unwrap();
    mimir(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal Troubleshooting Assistant"))
        .stdout(predicate::str::contains("--select-model"));
}

#[test]
fn first_run_creates_the_default_settings_file() {
    let dir = tempdir().unwrap();
    mimir(&dir)
        .arg("--config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Configuration"))
        .stdout(predicate::str::contains("tinyllama:latest"));

    let settings = read_settings(&dir);
    assert_eq!(settings["model"], "tinyllama:latest");
    assert_eq!(settings["use_default_model"], true);
    assert!(settings["profiles"]["balanced"].is_object());
}

#[test]
fn out_of_range_temperature_is_rejected_without_disk_write() {
    let dir = tempdir().unwrap();
    // First run creates the default file
    mimir(&dir).arg("--config").assert().success();

    mimir(&dir)
        .args(["--temp", "1.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Temperature must be between 0.0 and 1.0",
        ));

    let settings = read_settings(&dir);
    assert_eq!(settings["temperature"].as_f64().unwrap(), 0.1);
}

#[test]
fn valid_temperature_is_persisted() {
    let dir = tempdir().unwrap();
    mimir(&dir)
        .args(["--temp", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set temperature to: 0.5"));

    let settings = read_settings(&dir);
    assert_eq!(settings["temperature"].as_f64().unwrap(), 0.5);
}

#[test]
fn profile_switch_reports_but_never_persists() {
    let dir = tempdir().unwrap();
    mimir(&dir)
        .args(["--profile", "balanced"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to 'balanced' profile"))
        .stdout(predicate::str::contains("llama3.2:1b"));

    // The on-disk record is untouched by a profile switch
    let settings = read_settings(&dir);
    assert_eq!(settings["model"], "tinyllama:latest");
    assert_eq!(settings["temperature"].as_f64().unwrap(), 0.1);
}

#[test]
fn unknown_profile_reports_the_valid_names() {
    let dir = tempdir().unwrap();
    mimir(&dir)
        .args(["--profile", "turbo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile 'turbo' not found"))
        .stdout(predicate::str::contains("lightweight"))
        .stdout(predicate::str::contains("powerful"));
}

#[test]
fn search_flags_compose_in_order_without_synthesis() {
    let dir = tempdir().unwrap();
    write_offline_settings(&dir);
    std::fs::write(
        dir.path().join("mimir_history.log"),
        "[2026-01-01 10:00:00] USER: apt question\nunrelated line\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("bash_history"),
        "apt install foo\nls -la\nAPT update\n",
    )
    .unwrap();

    let output = mimir(&dir)
        .args(["apt", "--logs", "--history"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let logs_at = stdout.find("Logs:").expect("logs section missing");
    let history_at = stdout
        .find("Bash History:")
        .expect("history section missing");
    assert!(logs_at < history_at, "sections out of order:\n{}", stdout);

    assert!(stdout.contains("apt install foo"));
    assert!(stdout.contains("APT update"));
    // Search flags must not trigger command synthesis or logging
    assert!(!stdout.contains("Mimir Says"));
    let log = std::fs::read_to_string(dir.path().join("mimir_history.log")).unwrap();
    assert!(!log.contains("] BOT:"));
}

#[test]
fn bare_query_synthesizes_and_logs_exactly_one_interaction() {
    let dir = tempdir().unwrap();
    write_offline_settings(&dir);

    mimir(&dir)
        .arg("check disk space")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mimir Says:"))
        .stdout(predicate::str::contains("Error connecting to Ollama"));

    let log = std::fs::read_to_string(dir.path().join("mimir_history.log")).unwrap();
    assert_eq!(log.matches("] USER: check disk space").count(), 1);
    assert_eq!(log.matches("] MODEL: tinyllama:latest").count(), 1);
}

#[test]
fn search_flags_without_a_query_fall_back_to_help() {
    let dir = tempdir().unwrap();
    mimir(&dir)
        .arg("--logs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}
