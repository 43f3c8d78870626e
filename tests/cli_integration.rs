//! Integration tests for the CredVault CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! The master secret is supplied via `CREDVAULT_PASSWORD` and commands
//! are piped through stdin, so no interactive prompt is needed.
//! `--iterations 10` keeps the KDF cheap for tests.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: get a Command pointing at the credvault binary with the
/// master secret and fast KDF params already set.
fn credvault(master: &str) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("credvault").expect("binary should exist");
    cmd.env("CREDVAULT_PASSWORD", master)
        .args(["--iterations", "10"]);
    cmd
}

#[test]
fn help_flag_shows_usage() {
    #[allow(deprecated)]
    Command::cargo_bin("credvault")
        .expect("binary should exist")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "In-memory credential verification vault",
        ))
        .stdout(predicate::str::contains("--iterations"))
        .stdout(predicate::str::contains("--config-dir"));
}

#[test]
fn version_flag_shows_version() {
    #[allow(deprecated)]
    Command::cargo_bin("credvault")
        .expect("binary should exist")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("credvault"));
}

#[test]
fn set_then_get_prints_the_derived_hex() {
    credvault("hunter2")
        .write_stdin("set email\nhunter2\nget email\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?m)^[0-9a-f]{64}$").unwrap());
}

#[test]
fn get_with_non_matching_secret_reports_authentication_failure() {
    credvault("hunter2")
        .write_stdin("set email\nother-secret\nget email\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid master password"));
}

#[test]
fn get_on_missing_identifier_reports_not_found() {
    credvault("hunter2")
        .write_stdin("get missing\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No record under 'missing'"));
}

#[test]
fn empty_secret_is_rejected_and_the_loop_continues() {
    credvault("hunter2")
        .write_stdin("set email\n\nlist\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Secret cannot be empty"))
        .stdout(predicate::str::contains("No records in this session yet."));
}

#[test]
fn generate_prints_a_password_of_the_requested_length() {
    credvault("hunter2")
        .write_stdin("generate 24\nexit\n")
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            let line = out.trim_end_matches('\n');
            line.len() == 24 && line.chars().all(|c| c.is_ascii_graphic())
        }));
}

#[test]
fn generate_rejects_a_non_numeric_length() {
    credvault("hunter2")
        .write_stdin("generate lots\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("length must be a non-negative"));
}

#[test]
fn unknown_command_prints_a_warning() {
    credvault("hunter2")
        .write_stdin("frobnicate\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command 'frobnicate'"));
}

#[test]
fn zero_iterations_fails_the_commit_not_the_process() {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("credvault").expect("binary should exist");
    cmd.env("CREDVAULT_PASSWORD", "hunter2")
        .args(["--iterations", "0"])
        .write_stdin("set email\nhunter2\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid KDF configuration"));
}

#[test]
fn config_file_sets_the_default_generate_length() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(".credvault.toml"),
        "kdf_iterations = 10\ndefault_generate_length = 12\n",
    )
    .unwrap();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("credvault").expect("binary should exist");
    cmd.env("CREDVAULT_PASSWORD", "hunter2")
        .args(["--config-dir", tmp.path().to_str().unwrap()])
        .write_stdin("generate\nexit\n")
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            out.trim_end_matches('\n').len() == 12
        }));
}

#[test]
fn vault_is_discarded_between_processes() {
    // First process commits a record...
    credvault("hunter2")
        .write_stdin("set email\nhunter2\nexit\n")
        .assert()
        .success();

    // ...and a second process cannot see it: nothing is persisted.
    credvault("hunter2")
        .write_stdin("get email\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No record under 'email'"));
}

#[test]
fn invalid_config_file_fails_at_startup() {
    let tmp = tempfile::TempDir::new().unwrap();
    std::fs::write(tmp.path().join(".credvault.toml"), "not valid {{toml").unwrap();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("credvault").expect("binary should exist");
    cmd.env("CREDVAULT_PASSWORD", "hunter2")
        .args(["--config-dir", tmp.path().to_str().unwrap()])
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file error"));
}
