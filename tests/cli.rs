use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("piplot").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("piplot"));
}

#[test]
fn cli_saves_without_window() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("demo.svg");
    let mut cmd = Command::cargo_bin("piplot").unwrap();
    // keep a user's own settings file out of the way
    cmd.env("XDG_CONFIG_HOME", dir.path());
    cmd.args(["--start", "-10", "--stop", "10", "--step", "0.05", "--save"])
        .arg(&out)
        .args(["--width", "640", "--height", "400"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote plot"));
    assert!(out.exists());
}

#[test]
fn cli_rejects_non_boolean_flag_override() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("never.svg");
    let mut cmd = Command::cargo_bin("piplot").unwrap();
    cmd.args(["--set", "need_grid=1", "--save"]).arg(&out);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("boolean"));
    assert!(!out.exists());
}

#[test]
fn cli_rejects_unknown_curve() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("piplot").unwrap();
    cmd.args(["--curves", "sin,sinh", "--save"])
        .arg(dir.path().join("never.svg"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown function"));
}

#[test]
fn cli_rejects_inverted_range() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("piplot").unwrap();
    cmd.args(["--start", "10", "--stop", "5", "--save"])
        .arg(dir.path().join("never.svg"));
    cmd.assert().failure();
}

#[test]
fn cli_rejects_step_too_fine_for_range() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("piplot").unwrap();
    cmd.env("XDG_CONFIG_HOME", dir.path())
        .args(["--start=-1e10", "--stop=1e10", "--step=1e-10", "--save"])
        .arg(dir.path().join("never.svg"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("samples"));
    assert!(!dir.path().join("never.svg").exists());
}
