//! Smoke tests for the `spechtlab` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("spechtlab").unwrap()
}

#[test]
fn help_lists_options() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn dry_run_prints_the_layout() {
    cmd()
        .args(["--dry-run", "--date", "19-10-2026"])
        .write_stdin("Beam\nLength,Width\nabc\n1\n2.5\n0.4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a valid numeric value."))
        .stdout(predicate::str::contains("\"Report Date: 19-10-2026\""))
        .stdout(predicate::str::contains("\"Measured Object: Beam\""));
}

#[test]
fn writes_pdf_to_requested_path() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("beam.pdf");

    cmd()
        .arg("--output")
        .arg(&output)
        .write_stdin("Beam\nLength\n1\n2.5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"));

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn rejects_malformed_dates() {
    cmd()
        .args(["--date", "2026-10-19"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid report date"));
}

#[test]
fn closed_stdin_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("never.pdf");

    cmd()
        .arg("-o")
        .arg(&output)
        .write_stdin("Beam\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input ended"));

    assert!(!output.exists());
}
