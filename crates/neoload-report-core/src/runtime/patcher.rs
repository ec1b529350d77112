// crates/neoload-report-core/src/runtime/patcher.rs
// ============================================================================
// Module: Report Patcher
// Description: Injects overflow-hiding CSS into a NeoLoad frameset report.
// Purpose: Make the report render inside the CI sidebar panel, once.
// Dependencies: crate::{core, interfaces}, thiserror
// ============================================================================

//! ## Overview
//! Patching touches three files in order: the main report page, its menu
//! frame, and its stylesheet. The menu and stylesheet links are read from the
//! already-patched report content and must resolve inside the report's
//! directory. Each file gets an applied-style marker, and a file that already
//! carries its marker is never patched again. The report
//! keeps its original modification time so later freshness checks still see
//! the time the build produced it.
//!
//! Failures are reported to the caller but leave already-written files as they
//! are; there is no rollback.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::artifact::resolve_contained;
use crate::core::detector::COMMENT_APPLIED_STYLE;
use crate::core::detector::COMMENT_CSS_APPLIED_STYLE;
use crate::core::markup::BODY_RULE_OPEN;
use crate::core::markup::OVERFLOW_BODY_DECLARATION;
use crate::core::markup::OVERFLOW_STYLE_ATTRIBUTE;
use crate::core::markup::attribute_value;
use crate::core::markup::first_quoted_value;
use crate::core::markup::first_tag;
use crate::core::markup::insert_after_first;
use crate::interfaces::FileStoreError;
use crate::interfaces::ReportFileStore;
use crate::runtime::locator::LocatedReport;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Patch errors. None of them are fatal to link resolution.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The report page could not be rewritten.
    #[error("unable to rewrite report: {0}")]
    Report(#[source] FileStoreError),
    /// The report has no frame `src` attribute.
    #[error("report has no menu frame link")]
    MissingMenuLink,
    /// The menu frame could not be read or rewritten.
    #[error("unable to patch menu frame: {0}")]
    Menu(#[source] FileStoreError),
    /// The report has no `<link>` tag with an `href`.
    #[error("report has no stylesheet link")]
    MissingStylesheetLink,
    /// The stylesheet could not be read or rewritten.
    #[error("unable to patch stylesheet: {0}")]
    Stylesheet(#[source] FileStoreError),
    /// A companion link escapes the report directory.
    #[error("refusing companion link outside the report directory: {link}")]
    UnsafeLink {
        /// Link as written in the report.
        link: String,
    },
}

/// Result of a successful patch pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The report already carried the applied-style marker; nothing changed.
    AlreadyApplied,
    /// The report, menu, and stylesheet were patched.
    Applied,
}

// ============================================================================
// SECTION: Content Transforms
// ============================================================================

/// Returns the patched main report page.
#[must_use]
pub fn patch_report_content(content: &str) -> String {
    let mut patched = content.to_string();
    insert_after_first(&mut patched, "id=\"menu\"", OVERFLOW_STYLE_ATTRIBUTE);
    insert_after_first(&mut patched, "id=\"content\"", OVERFLOW_STYLE_ATTRIBUTE);
    patched.push_str(COMMENT_APPLIED_STYLE);
    patched
}

/// Returns a menu or stylesheet body with the overflow rule and `marker`.
#[must_use]
pub fn patch_frame_content(content: &str, marker: &str) -> String {
    let mut patched = content.to_string();
    insert_after_first(&mut patched, BODY_RULE_OPEN, OVERFLOW_BODY_DECLARATION);
    patched.push_str(marker);
    patched
}

/// Returns the menu frame link: the first `src="..."` value.
#[must_use]
pub fn menu_link(report_content: &str) -> Option<&str> {
    first_quoted_value(report_content, "src=\"")
}

/// Returns the stylesheet link: the `href` of the first `<link>` tag.
#[must_use]
pub fn stylesheet_link(report_content: &str) -> Option<&str> {
    first_tag(report_content, "<link").and_then(|tag| attribute_value(tag, "href"))
}

// ============================================================================
// SECTION: Patching
// ============================================================================

/// Patches the report and its companion files in place.
///
/// On success `report.content` holds the patched report page.
///
/// # Errors
///
/// Returns [`PatchError`] for the first step that fails; earlier steps stay
/// written.
pub fn patch_report(
    store: &dyn ReportFileStore,
    report: &mut LocatedReport,
) -> Result<PatchOutcome, PatchError> {
    if report.content.contains(COMMENT_APPLIED_STYLE) {
        return Ok(PatchOutcome::AlreadyApplied);
    }

    report.content = patch_report_content(&report.content);
    let original_mtime = store.modified(&report.file).map_err(PatchError::Report)?;
    store.write(&report.file, &report.content).map_err(PatchError::Report)?;
    // Companions are still patched when the mtime cannot be restored.
    let restored = store.set_modified(&report.file, original_mtime).map_err(PatchError::Report);

    let report_dir = report.file.parent().unwrap_or_else(|| Path::new(""));

    let menu = menu_link(&report.content).ok_or(PatchError::MissingMenuLink)?;
    patch_companion(store, &companion_path(report_dir, menu)?, COMMENT_APPLIED_STYLE)
        .map_err(PatchError::Menu)?;

    let stylesheet = stylesheet_link(&report.content).ok_or(PatchError::MissingStylesheetLink)?;
    patch_companion(store, &companion_path(report_dir, stylesheet)?, COMMENT_CSS_APPLIED_STYLE)
        .map_err(PatchError::Stylesheet)?;

    restored?;
    Ok(PatchOutcome::Applied)
}

/// Resolves a companion link inside the report directory.
fn companion_path(report_dir: &Path, link: &str) -> Result<PathBuf, PatchError> {
    resolve_contained(report_dir, link).ok_or_else(|| PatchError::UnsafeLink {
        link: link.to_string(),
    })
}

/// Patches a menu or stylesheet file unless it already carries `marker`.
fn patch_companion(
    store: &dyn ReportFileStore,
    path: &Path,
    marker: &str,
) -> Result<(), FileStoreError> {
    let content = store.read_to_string(path)?;
    if content.contains(marker) {
        return Ok(());
    }
    store.write(path, &patch_frame_content(&content, marker))
}
