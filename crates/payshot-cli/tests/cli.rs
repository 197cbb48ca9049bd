//! Smoke tests for the payshot binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("payshot")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn batch_rejects_empty_selection() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("payshot")
        .unwrap()
        .current_dir(dir.path())
        .args(["batch", "*.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching images"));
}

#[test]
fn extract_rejects_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("payshot")
        .unwrap()
        .current_dir(dir.path())
        .args(["extract", "missing.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_path_prints_location() {
    Command::cargo_bin("payshot")
        .unwrap()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));
}
