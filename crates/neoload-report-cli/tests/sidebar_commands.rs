// crates/neoload-report-cli/tests/sidebar_commands.rs
// ============================================================================
// Module: CLI Sidebar Command Tests
// Description: Integration tests for the sidebar and detect commands.
// Purpose: Ensure the binary resolves, patches, and reports builds end to end.
// Dependencies: neoload-report-cli binary, tempfile
// ============================================================================

//! ## Overview
//! Runs the CLI binary against temporary workspaces and artifact stores and
//! checks the JSON and text output, file patching, and exit codes.

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

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;
use std::time::Duration;
use std::time::UNIX_EPOCH;

use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Build start shared by every scenario.
const BUILD_START_MS: u64 = 1_700_000_000_000;

/// Minimal tagged report with both frames and a stylesheet.
const REPORT_HTML: &str = "<html><head><link rel=\"stylesheet\" href=\"css/style.css\"></head>\n\
<!-- #HTML Report Generated by NeoLoad# -->\n\
<frameset><frame id=\"menu\" src=\"menu.html\"><frame id=\"content\" src=\"summary.html\">\
</frameset></html>\n";

fn neoload_report_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_neoload-report"))
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    fs::write(path, content).expect("write file");
}

fn set_mtime_ms(path: &Path, millis: u64) {
    let file = File::options().write(true).open(path).expect("open for mtime");
    file.set_modified(UNIX_EPOCH + Duration::from_millis(millis)).expect("set mtime");
}

/// Lays out a workspace and artifact store holding one report under `results/`.
fn layout(offset_ms: i64) -> (TempDir, TempDir) {
    let workspace = tempfile::tempdir().expect("workspace");
    let store = tempfile::tempdir().expect("store");
    let workspace_report = workspace.path().join("results/report.html");
    write(&workspace_report, REPORT_HTML);
    set_mtime_ms(&workspace_report, BUILD_START_MS.saturating_add_signed(offset_ms));
    write(&store.path().join("results/report.html"), REPORT_HTML);
    write(&store.path().join("results/menu.html"), "<style>body {\n}</style>");
    write(&store.path().join("results/css/style.css"), "body {\n}\n");
    write(&store.path().join("results/data.csv"), "a,b\n");
    (workspace, store)
}

fn run_sidebar(workspace: &Path, store: &Path, extra: &[&str]) -> Output {
    Command::new(neoload_report_bin())
        .env_remove("NEOLOAD_REPORT_CONFIG")
        .current_dir(workspace)
        .args(["sidebar", "--workspace"])
        .arg(workspace)
        .arg("--artifacts")
        .arg(store)
        .args(["--build-start-ms", &BUILD_START_MS.to_string(), "--build-number", "7"])
        .args(["--job", "nightly"])
        .args(extra)
        .output()
        .expect("run sidebar")
}

// ============================================================================
// SECTION: Sidebar
// ============================================================================

/// Verifies a fresh report is found, patched, and printed as JSON.
#[test]
fn sidebar_finds_and_patches_fresh_report() {
    let (workspace, store) = layout(5_000);
    let output = run_sidebar(workspace.path(), store.path(), &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("sidebar emits json");
    assert_eq!(value["found"], true);
    assert_eq!(value["href"], "results/report.html");
    assert_eq!(value["display_name"], "Performance Result");
    assert_eq!(value["url_name"], "neoload-report");
    assert_eq!(value["build_number"], 7);

    let report = fs::read_to_string(store.path().join("results/report.html")).unwrap();
    assert!(report.ends_with("<!-- NeoLoad Jenkins plugin applied style -->"));
    let style = fs::read_to_string(store.path().join("results/css/style.css")).unwrap();
    assert!(style.ends_with("/* NeoLoad Jenkins plugin applied style */"));
}

/// Verifies a stale report yields an absent summary and stays untouched.
#[test]
fn sidebar_reports_absent_for_stale_report() {
    let (workspace, store) = layout(-5_000);
    let output = run_sidebar(workspace.path(), store.path(), &["--format", "text"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "No NeoLoad report for build 7 of job nightly.");
    let report = fs::read_to_string(store.path().join("results/report.html")).unwrap();
    assert_eq!(report, REPORT_HTML);
}

/// Verifies text output and a configured presentation.
#[test]
fn sidebar_text_output_uses_configured_presentation() {
    let (workspace, store) = layout(5_000);
    let config_dir = tempfile::tempdir().expect("config dir");
    let config_path = config_dir.path().join("neoload-report.toml");
    fs::write(
        &config_path,
        "[sidebar]\ndisplay_name = \"Load Test\"\nurl_name = \"load\"\n\n[logging]\nsink = \"none\"\n",
    )
    .expect("write config");
    let config_arg = config_path.to_string_lossy().to_string();
    let output =
        run_sidebar(workspace.path(), store.path(), &["--format", "text", "--config", &config_arg]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Load Test -> load (results/report.html)"));
    assert!(output.stderr.is_empty());
}

/// Verifies a missing artifact store fails with an explicit error.
#[test]
fn sidebar_fails_for_missing_artifact_store() {
    let workspace = tempfile::tempdir().expect("workspace");
    let missing = workspace.path().join("nope");
    let output = run_sidebar(workspace.path(), &missing, &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to enumerate artifacts"));
}

// ============================================================================
// SECTION: Detect
// ============================================================================

/// Verifies detect exit codes for report and non-report files.
#[test]
fn detect_distinguishes_reports() {
    let dir = tempfile::tempdir().expect("dir");
    let report = dir.path().join("report.html");
    let other = dir.path().join("coverage.html");
    fs::write(&report, REPORT_HTML).expect("write report");
    fs::write(&other, "<html>coverage</html>").expect("write other");

    let output = Command::new(neoload_report_bin()).arg("detect").arg(&report).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(": NeoLoad report"));

    let output = Command::new(neoload_report_bin()).arg("detect").arg(&other).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("not a NeoLoad report"));
}
