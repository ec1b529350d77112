// crates/neoload-report-cli/src/artifacts.rs
// ============================================================================
// Module: Artifact Store Enumeration
// Description: Builds the archived artifact list from an on-disk store.
// Purpose: Give the CLI the same artifact view a CI host would provide.
// Dependencies: neoload-report-core, walkdir
// ============================================================================

//! ## Overview
//! Walks an artifact store directory and produces one [`Artifact`] per regular
//! file. Relative paths use `/` separators and double as hrefs. Entries are
//! sorted by relative path so scans are deterministic across platforms.
//! Symbolic links are not followed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;

use neoload_report_core::Artifact;
use thiserror::Error;
use walkdir::WalkDir;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures while enumerating an artifact store.
#[derive(Debug, Error)]
pub enum ArtifactScanError {
    /// The store root is missing or not a directory.
    #[error("{path} is not a directory")]
    NotADirectory {
        /// Store root that was requested.
        path: PathBuf,
    },
    /// Directory traversal failed.
    #[error("{0}")]
    Walk(#[from] walkdir::Error),
    /// A file name is not valid UTF-8 and cannot form an href.
    #[error("non utf-8 artifact path: {path}")]
    NonUtf8Path {
        /// Offending path.
        path: PathBuf,
    },
}

// ============================================================================
// SECTION: Enumeration
// ============================================================================

/// Lists every regular file under `store_root` as an artifact.
///
/// # Errors
///
/// Returns [`ArtifactScanError`] when the root is not a directory, traversal
/// fails, or a path cannot be expressed as UTF-8.
pub fn collect_artifacts(store_root: &Path) -> Result<Vec<Artifact>, ArtifactScanError> {
    if !store_root.is_dir() {
        return Err(ArtifactScanError::NotADirectory {
            path: store_root.to_path_buf(),
        });
    }
    let mut relative_paths = Vec::new();
    for entry in WalkDir::new(store_root).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(store_root) else {
            continue;
        };
        relative_paths.push(relative_href(relative)?);
    }
    relative_paths.sort();
    Ok(relative_paths.iter().map(|relative| Artifact::from_relative(store_root, relative)).collect())
}

/// Joins the components of a relative path with `/`.
fn relative_href(relative: &Path) -> Result<String, ArtifactScanError> {
    let mut segments = Vec::new();
    for component in relative.components() {
        let segment = component.as_os_str().to_str().ok_or_else(|| ArtifactScanError::NonUtf8Path {
            path: relative.to_path_buf(),
        })?;
        segments.push(segment);
    }
    Ok(segments.join("/"))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
