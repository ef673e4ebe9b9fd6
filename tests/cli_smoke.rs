//! Binary smoke tests using assert_cmd.
//!
//! These run the compiled `densemat` walkthrough end-to-end and check the
//! printed report, argument parsing and config-file handling.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("densemat").unwrap()
}

// ---------------------------------------------------------------------------
// Default run
// ---------------------------------------------------------------------------

#[test]
fn default_run_prints_reference_results() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("-- Matrix Assignment Test --"))
        .stdout(predicate::str::contains(
            "A + B:\nMatrix (2x3):\n[   7.00   7.00   7.00 ]\n[   7.00   7.00   7.00 ]\n",
        ))
        .stdout(predicate::str::contains(
            "A - B:\nMatrix (2x3):\n[  -5.00  -3.00  -1.00 ]\n[   1.00   3.00   5.00 ]\n",
        ))
        .stdout(predicate::str::contains(
            "A / 2:\nMatrix (2x3):\n[   0.50   1.00   1.50 ]\n[   2.00   2.50   3.00 ]\n",
        ))
        .stdout(predicate::str::contains("-- End of Tests --"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn verbose_flag_runs() {
    cmd()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("-- End of Tests --"));
}

#[test]
fn unknown_flag_fails() {
    cmd()
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ---------------------------------------------------------------------------
// Config file
// ---------------------------------------------------------------------------

#[test]
fn config_file_changes_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("render.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, r#"{{"precision": 1}}"#).unwrap();

    cmd()
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[    7.0    7.0    7.0 ]"));
}

#[test]
fn missing_config_file_errors() {
    cmd()
        .args(["--config", "/nonexistent/render.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn malformed_config_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("render.json");
    std::fs::write(&path, "not json").unwrap();

    cmd()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn oversized_width_in_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("render.json");
    std::fs::write(&path, r#"{"width": 18446744073709551615}"#).unwrap();

    cmd()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("width must be at most"));
}
