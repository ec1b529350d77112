// crates/neoload-report-cli/tests/config_commands.rs
// ============================================================================
// Module: CLI Config Command Tests
// Description: Integration tests for CLI config validation.
// Purpose: Ensure config validation reports success and fails closed on errors.
// Dependencies: neoload-report-cli binary, tempfile
// ============================================================================

//! ## Overview
//! Runs the CLI binary for config validation and ensures invalid configuration
//! fails closed with explicit errors.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn neoload_report_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_neoload-report"))
}

/// Verifies a valid config is accepted.
#[test]
fn config_validate_accepts_valid_config() {
    let dir = tempfile::tempdir().expect("dir");
    let path = dir.path().join("neoload-report.toml");
    fs::write(&path, "[scan]\nstrict = true\n").expect("write config");
    let output = Command::new(neoload_report_bin())
        .args(["config", "validate", "--config"])
        .arg(&path)
        .output()
        .expect("config validate");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Config valid."));
}

/// Verifies an invalid config is rejected with the reason.
#[test]
fn config_validate_rejects_invalid_config() {
    let dir = tempfile::tempdir().expect("dir");
    let path = dir.path().join("neoload-report.toml");
    fs::write(&path, "[logging]\nsink = \"file\"\n").expect("write config");
    let output = Command::new(neoload_report_bin())
        .args(["config", "validate", "--config"])
        .arg(&path)
        .output()
        .expect("config validate");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config"));
    assert!(stderr.contains("logging.path required for file sink"));
}

/// Verifies a missing explicit config is an error.
#[test]
fn config_validate_rejects_missing_file() {
    let dir = tempfile::tempdir().expect("dir");
    let output = Command::new(neoload_report_bin())
        .args(["config", "validate", "--config"])
        .arg(dir.path().join("absent.toml"))
        .output()
        .expect("config validate");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("config io error"));
}
