// crates/neoload-report-core/src/core/artifact.rs
// ============================================================================
// Module: Build Artifacts
// Description: Host-supplied build record and its archived artifacts.
// Purpose: Describe the inputs the report locator scans.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`BuildRecord`] is the host build system's view of one completed build:
//! its start time, its workspace, and the ordered list of archived artifacts.
//! Records are immutable inputs; the report pipeline only reads them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::core::timestamp::Timestamp;

// ============================================================================
// SECTION: Artifacts
// ============================================================================

/// A file archived by the CI system as a permanent output of a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// File name without directories.
    pub file_name: String,
    /// Absolute path of the archived copy in the artifact store.
    pub file_path: PathBuf,
    /// Path relative to the build workspace, `/` separated.
    pub relative_path: String,
    /// URL fragment under which the host serves the archived copy.
    pub href: String,
}

impl Artifact {
    /// Builds an artifact whose href matches its relative path, which is how
    /// the host lays out archived files.
    #[must_use]
    pub fn from_relative(store_root: &Path, relative_path: &str) -> Self {
        let file_name = relative_path.rsplit('/').next().unwrap_or(relative_path).to_string();
        Self {
            file_name,
            file_path: join_relative(store_root, relative_path),
            relative_path: relative_path.to_string(),
            href: relative_path.to_string(),
        }
    }
}

// ============================================================================
// SECTION: Build Record
// ============================================================================

/// A completed build as seen by the report integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecord {
    /// Build number within its job.
    pub number: u64,
    /// Display name of the owning job.
    pub job_name: String,
    /// Recorded build start time.
    pub started_at: Timestamp,
    /// Workspace root the build ran in, when it still exists.
    pub workspace_root: Option<PathBuf>,
    /// Archived artifacts in host order.
    pub artifacts: Vec<Artifact>,
}

impl BuildRecord {
    /// Returns the workspace copy of an artifact, or `None` when the build has
    /// no workspace.
    #[must_use]
    pub fn workspace_file(&self, artifact: &Artifact) -> Option<PathBuf> {
        self.workspace_root.as_deref().map(|root| join_relative(root, &artifact.relative_path))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Joins a `/` separated relative path onto a base directory.
///
/// Empty segments are dropped so leading or doubled separators cannot turn the
/// relative path into an absolute one.
#[must_use]
pub fn join_relative(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(base.to_path_buf(), |path, segment| path.join(segment))
}

/// Joins a `/` separated link onto a base directory, refusing to leave it.
///
/// Returns `None` when any segment is `.` or `..` or carries a `\`
/// separator. Empty segments are dropped as in [`join_relative`].
#[must_use]
pub fn resolve_contained(base: &Path, relative: &str) -> Option<PathBuf> {
    let mut path = base.to_path_buf();
    for segment in relative.split('/').filter(|segment| !segment.is_empty()) {
        if segment == "." || segment == ".." || segment.contains('\\') {
            return None;
        }
        path.push(segment);
    }
    Some(path)
}
