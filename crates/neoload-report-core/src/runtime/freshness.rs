// crates/neoload-report-core/src/runtime/freshness.rs
// ============================================================================
// Module: Report Freshness Validator
// Description: Rejects reports left over from earlier builds.
// Purpose: Tie a report artifact to the build that archived it.
// Dependencies: crate::{core, interfaces}, thiserror
// ============================================================================

//! ## Overview
//! The host copies workspace files into the artifact store after the job
//! ends, so the archived copy always looks new. Freshness is therefore judged
//! on the workspace copy: it must have been modified strictly after the build
//! started. Equal times reject. A missing workspace or unreadable file is an
//! error, never a pass.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

use crate::core::artifact::Artifact;
use crate::core::artifact::BuildRecord;
use crate::core::timestamp::Timestamp;
use crate::interfaces::FileStoreError;
use crate::interfaces::ReportFileStore;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Freshness validation errors.
#[derive(Debug, Error)]
pub enum FreshnessError {
    /// The build has no workspace to compare against.
    #[error("build {build} has no workspace for {artifact}")]
    MissingWorkspace {
        /// Build number.
        build: u64,
        /// Artifact relative path.
        artifact: String,
    },
    /// The workspace copy could not be inspected.
    #[error("workspace file check failed: {0}")]
    Metadata(#[from] FileStoreError),
}

/// Outcome of comparing a workspace file against the build start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreshnessCheck {
    /// Workspace copy that was inspected.
    pub workspace_file: PathBuf,
    /// Build start time.
    pub build_started_at: Timestamp,
    /// Workspace copy modification time.
    pub file_modified_at: Timestamp,
}

impl FreshnessCheck {
    /// Returns true when the workspace copy postdates the build start.
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        self.build_started_at.is_before(self.file_modified_at)
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Compares the artifact's workspace copy against the build start time.
///
/// # Errors
///
/// Returns [`FreshnessError`] when the build has no workspace or the workspace
/// copy's modification time cannot be read.
pub fn check_freshness(
    build: &BuildRecord,
    artifact: &Artifact,
    store: &dyn ReportFileStore,
) -> Result<FreshnessCheck, FreshnessError> {
    let workspace_file =
        build.workspace_file(artifact).ok_or_else(|| FreshnessError::MissingWorkspace {
            build: build.number,
            artifact: artifact.relative_path.clone(),
        })?;
    let modified = store.modified(&workspace_file)?;
    Ok(FreshnessCheck {
        workspace_file,
        build_started_at: build.started_at,
        file_modified_at: Timestamp::from_system_time(modified),
    })
}
