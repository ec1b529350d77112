// crates/neoload-report-cli/src/tests/i18n.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Unit tests for catalog lookup and placeholder substitution.
// Purpose: Ensure CLI messages render predictably.
// Dependencies: neoload-report-cli i18n module
// ============================================================================

//! ## Overview
//! Verifies placeholder substitution, missing-key fallback, and the `t!` macro.

use crate::i18n::MessageArg;
use crate::i18n::translate;

#[test]
fn translate_substitutes_placeholders() {
    let output = translate(
        "sidebar.not_found",
        vec![MessageArg::new("build", "42"), MessageArg::new("job", "load-test")],
    );
    assert_eq!(output, "No NeoLoad report for build 42 of job load-test.");
}

#[test]
fn translate_leaves_missing_placeholder_visible() {
    let output = translate("detect.read_failed", vec![MessageArg::new("path", "report.html")]);
    assert_eq!(output, "Failed to read report.html: {error}");
}

#[test]
fn unknown_key_falls_back_to_key() {
    assert_eq!(translate("no.such.key", Vec::new()), "no.such.key");
}

#[test]
fn macro_formats_display_values() {
    let output = crate::t!("main.version", version = "0.1.0");
    assert_eq!(output, "neoload-report 0.1.0");
}
