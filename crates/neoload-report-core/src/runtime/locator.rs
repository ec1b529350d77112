// crates/neoload-report-core/src/runtime/locator.rs
// ============================================================================
// Module: Report Locator
// Description: Scans build artifacts for the build's NeoLoad HTML report.
// Purpose: Pick the first fresh NeoLoad report and prepare it for the sidebar.
// Dependencies: crate::{core, interfaces, runtime}, thiserror
// ============================================================================

//! ## Overview
//! The locator walks artifacts in host order and stops at the first HTML
//! artifact that is both a NeoLoad report and fresh for the build. Read and
//! freshness failures are logged and the artifact is skipped; in strict mode
//! they are returned instead. Patch failures are only ever logged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::core::artifact::Artifact;
use crate::core::artifact::BuildRecord;
use crate::core::detector::is_html_file_name;
use crate::core::detector::is_neoload_report;
use crate::core::events::EVENT_ARTIFACT_SKIPPED;
use crate::core::events::EVENT_FRESHNESS_CHECKED;
use crate::core::events::EVENT_PATCH_APPLIED;
use crate::core::events::EVENT_PATCH_FAILED;
use crate::core::events::EVENT_PATCH_SKIPPED;
use crate::core::events::EVENT_REPORT_LOCATED;
use crate::core::events::EVENT_REPORT_NOT_FOUND;
use crate::core::events::EVENT_REPORT_STALE;
use crate::core::events::LogLevel;
use crate::core::events::ReportEvent;
use crate::interfaces::FileStoreError;
use crate::interfaces::ReportFileStore;
use crate::interfaces::ReportLogSink;
use crate::runtime::freshness::FreshnessError;
use crate::runtime::freshness::check_freshness;
use crate::runtime::patcher::PatchOutcome;
use crate::runtime::patcher::patch_report;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Locator behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocatorConfig {
    /// Return scan failures instead of logging and skipping the artifact.
    pub strict: bool,
}

// ============================================================================
// SECTION: Types
// ============================================================================

/// The build's report, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedReport {
    /// Archived report file.
    pub file: PathBuf,
    /// URL fragment of the archived report.
    pub href: String,
    /// Report page content, updated in place by patching.
    pub content: String,
}

/// Locate errors, surfaced only in strict mode.
#[derive(Debug, Error)]
pub enum LocateError {
    /// An HTML artifact could not be read.
    #[error("unable to read artifact {artifact}: {source}")]
    Read {
        /// Artifact relative path.
        artifact: String,
        /// Underlying store error.
        #[source]
        source: FileStoreError,
    },
    /// A report's freshness could not be established.
    #[error("unable to check freshness of {artifact}: {source}")]
    Freshness {
        /// Artifact relative path.
        artifact: String,
        /// Underlying freshness error.
        #[source]
        source: FreshnessError,
    },
}

// ============================================================================
// SECTION: Locator
// ============================================================================

/// Finds, validates, and patches the NeoLoad report of a build.
#[derive(Clone)]
pub struct ReportLocator {
    /// Behavior switches.
    config: LocatorConfig,
    /// File access for artifacts and workspace copies.
    store: Arc<dyn ReportFileStore>,
    /// Event destination.
    sink: Arc<dyn ReportLogSink>,
}

impl ReportLocator {
    /// Creates a locator.
    #[must_use]
    pub fn new(
        config: LocatorConfig,
        store: Arc<dyn ReportFileStore>,
        sink: Arc<dyn ReportLogSink>,
    ) -> Self {
        Self {
            config,
            store,
            sink,
        }
    }

    /// Returns the locator configuration.
    #[must_use]
    pub const fn config(&self) -> LocatorConfig {
        self.config
    }

    /// Records an event on the locator's sink.
    pub fn record(&self, event: &ReportEvent) {
        self.sink.record(event);
    }

    /// Returns the first fresh NeoLoad report among the build's artifacts.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`LocateError`] for the first artifact that
    /// cannot be read or checked. Otherwise never fails.
    pub fn locate(&self, build: &BuildRecord) -> Result<Option<LocatedReport>, LocateError> {
        for artifact in build.artifacts.iter().filter(|a| is_html_file_name(&a.file_name)) {
            match self.inspect(build, artifact) {
                Ok(Some(report)) => {
                    self.sink.record(
                        &ReportEvent::new(
                            EVENT_REPORT_LOCATED,
                            LogLevel::Debug,
                            format!("Using {} as the performance report", artifact.file_name),
                        )
                        .with_build(build.number)
                        .with_path(&report.file),
                    );
                    return Ok(Some(report));
                }
                Ok(None) => {}
                Err(err) => {
                    self.sink.record(
                        &ReportEvent::new(
                            EVENT_ARTIFACT_SKIPPED,
                            LogLevel::Debug,
                            format!("Error reading file. {err}"),
                        )
                        .with_build(build.number)
                        .with_path(&artifact.file_path),
                    );
                    if self.config.strict {
                        return Err(err);
                    }
                }
            }
        }
        self.sink.record(
            &ReportEvent::new(
                EVENT_REPORT_NOT_FOUND,
                LogLevel::Debug,
                "No NeoLoad report from this build among the artifacts",
            )
            .with_build(build.number),
        );
        Ok(None)
    }

    /// Locates and patches the build's report, returning its href.
    ///
    /// Patch failures are logged as warnings and the href is still returned.
    ///
    /// # Errors
    ///
    /// Propagates [`LocateError`] from [`Self::locate`] in strict mode.
    pub fn resolve_href(&self, build: &BuildRecord) -> Result<Option<String>, LocateError> {
        let Some(mut report) = self.locate(build)? else {
            return Ok(None);
        };
        self.patch(build, &mut report);
        Ok(Some(report.href))
    }

    /// Applies the sidebar styling to a located report, logging the outcome.
    pub fn patch(&self, build: &BuildRecord, report: &mut LocatedReport) {
        let event = match patch_report(self.store.as_ref(), report) {
            Ok(PatchOutcome::Applied) => ReportEvent::new(
                EVENT_PATCH_APPLIED,
                LogLevel::Debug,
                "Applied sidebar style to report files",
            ),
            Ok(PatchOutcome::AlreadyApplied) => ReportEvent::new(
                EVENT_PATCH_SKIPPED,
                LogLevel::Debug,
                "Report files already carry the sidebar style",
            ),
            Err(err) => ReportEvent::new(
                EVENT_PATCH_FAILED,
                LogLevel::Warn,
                format!("Couldn't add custom style to report files. {err}"),
            ),
        };
        self.sink.record(&event.with_build(build.number).with_path(&report.file));
    }

    /// Reads one HTML artifact and decides whether it is the build's report.
    fn inspect(
        &self,
        build: &BuildRecord,
        artifact: &Artifact,
    ) -> Result<Option<LocatedReport>, LocateError> {
        let content =
            self.store.read_to_string(&artifact.file_path).map_err(|source| LocateError::Read {
                artifact: artifact.relative_path.clone(),
                source,
            })?;
        if !is_neoload_report(&content) {
            return Ok(None);
        }

        let check = check_freshness(build, artifact, self.store.as_ref()).map_err(|source| {
            LocateError::Freshness {
                artifact: artifact.relative_path.clone(),
                source,
            }
        })?;
        self.sink.record(
            &ReportEvent::new(
                EVENT_FRESHNESS_CHECKED,
                LogLevel::Debug,
                format!(
                    "Build start time: {}, Artifact file time: {}, Artifact file: {}",
                    check.build_started_at,
                    check.file_modified_at,
                    check.workspace_file.display()
                ),
            )
            .with_build(build.number)
            .with_path(&check.workspace_file),
        );

        if !check.is_fresh() {
            self.sink.record(
                &ReportEvent::new(
                    EVENT_REPORT_STALE,
                    LogLevel::Debug,
                    format!("Found {}, but it's too old to use.", artifact.file_name),
                )
                .with_build(build.number)
                .with_path(&artifact.file_path),
            );
            return Ok(None);
        }

        Ok(Some(LocatedReport {
            file: artifact.file_path.clone(),
            href: artifact.href.clone(),
            content,
        }))
    }
}
