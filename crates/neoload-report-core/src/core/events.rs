// crates/neoload-report-core/src/core/events.rs
// ============================================================================
// Module: Report Log Events
// Description: Structured log events emitted by the report pipeline.
// Purpose: Give sinks a stable, serializable record of pipeline decisions.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Every observable decision of the pipeline (skipped artifacts, stale
//! reports, patch failures) is recorded as a [`ReportEvent`]. Events are the
//! only error channel towards end users besides the presence of the link.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Event Names
// ============================================================================

/// A report-link action was attached to a build.
pub const EVENT_ACTION_ATTACHED: &str = "action_attached";
/// An HTML artifact could not be read or checked.
pub const EVENT_ARTIFACT_SKIPPED: &str = "artifact_skipped";
/// Build and workspace file times were compared.
pub const EVENT_FRESHNESS_CHECKED: &str = "freshness_checked";
/// A NeoLoad report was found but predates the build.
pub const EVENT_REPORT_STALE: &str = "report_stale";
/// A report was accepted for the build.
pub const EVENT_REPORT_LOCATED: &str = "report_located";
/// No artifact qualified as the build's report.
pub const EVENT_REPORT_NOT_FOUND: &str = "report_not_found";
/// Report files were patched.
pub const EVENT_PATCH_APPLIED: &str = "patch_applied";
/// Report files already carried the applied-style marker.
pub const EVENT_PATCH_SKIPPED: &str = "patch_skipped";
/// Patching failed part way.
pub const EVENT_PATCH_FAILED: &str = "patch_failed";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Severity of a report event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Diagnostic detail.
    Debug,
    /// Normal operation.
    Info,
    /// Degraded but non-fatal outcome.
    Warn,
}

/// Structured report pipeline event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event severity.
    pub level: LogLevel,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Build number when the event concerns a build.
    pub build_number: Option<u64>,
    /// File the event concerns, if any.
    pub path: Option<String>,
    /// Human-readable detail.
    pub message: String,
}

impl ReportEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(event: &'static str, level: LogLevel, message: impl Into<String>) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |elapsed| elapsed.as_millis());
        Self {
            event,
            level,
            timestamp_ms,
            build_number: None,
            path: None,
            message: message.into(),
        }
    }

    /// Attaches a build number.
    #[must_use]
    pub const fn with_build(mut self, build_number: u64) -> Self {
        self.build_number = Some(build_number);
        self
    }

    /// Attaches a file path.
    #[must_use]
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.display().to_string());
        self
    }
}
