// crates/neoload-report-core/src/runtime/file_store.rs
// ============================================================================
// Module: Local Report File Store
// Description: Filesystem implementation of the report file store.
// Purpose: Bounded reads and crash-safe rewrites of report files.
// Dependencies: crate::interfaces, tempfile
// ============================================================================

//! ## Overview
//! Reads are capped at a byte limit so a runaway artifact cannot exhaust
//! memory. Writes go to a temporary file in the target directory and are then
//! renamed over the target, so a crash mid-write never leaves the file
//! missing. The target's permissions are carried over to the replacement.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::fs::File;
use std::io::ErrorKind;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::time::SystemTime;

use tempfile::NamedTempFile;

use crate::interfaces::FileStoreError;
use crate::interfaces::ReportFileStore;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Default maximum size of a report file, in bytes.
pub const DEFAULT_MAX_REPORT_BYTES: usize = 16 * 1024 * 1024;

// ============================================================================
// SECTION: Store
// ============================================================================

/// Report file store backed by the local filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalFileStore {
    /// Maximum number of bytes read from a single file.
    max_bytes: usize,
}

impl LocalFileStore {
    /// Creates a store with the given read limit.
    #[must_use]
    pub const fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
        }
    }

    /// Returns the configured read limit.
    #[must_use]
    pub const fn max_bytes(&self) -> usize {
        self.max_bytes
    }
}

impl Default for LocalFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REPORT_BYTES)
    }
}

impl ReportFileStore for LocalFileStore {
    fn read_to_string(&self, path: &Path) -> Result<String, FileStoreError> {
        let file = File::open(path).map_err(|err| FileStoreError::from_io(path, &err))?;
        let limit = u64::try_from(self.max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
        let mut buf = Vec::new();
        file.take(limit)
            .read_to_end(&mut buf)
            .map_err(|err| FileStoreError::from_io(path, &err))?;
        if buf.len() > self.max_bytes {
            return Err(FileStoreError::TooLarge {
                path: path.display().to_string(),
                limit: self.max_bytes,
            });
        }
        String::from_utf8(buf).map_err(|_| FileStoreError::InvalidUtf8 {
            path: path.display().to_string(),
        })
    }

    fn modified(&self, path: &Path) -> Result<SystemTime, FileStoreError> {
        fs::metadata(path)
            .and_then(|meta| meta.modified())
            .map_err(|err| FileStoreError::from_io(path, &err))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), FileStoreError> {
        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let io_err = |err: std::io::Error| FileStoreError::from_io(path, &err);
        let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
        temp.write_all(content.as_bytes()).map_err(io_err)?;
        temp.flush().map_err(io_err)?;
        temp.as_file().sync_all().map_err(io_err)?;
        if let Ok(meta) = fs::metadata(path) {
            temp.as_file().set_permissions(meta.permissions()).map_err(io_err)?;
        }
        temp.persist(path).map_err(|err| io_err(err.error))?;
        Ok(())
    }

    fn set_modified(&self, path: &Path, modified: SystemTime) -> Result<(), FileStoreError> {
        // Read-only files can still have their times set by the owner on Unix.
        let file = match File::options().write(true).open(path) {
            Err(err) if err.kind() == ErrorKind::PermissionDenied => File::open(path),
            other => other,
        }
        .map_err(|err| FileStoreError::from_io(path, &err))?;
        file.set_modified(modified).map_err(|err| FileStoreError::from_io(path, &err))
    }
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only panic-based assertions are permitted."
    )]

    use super::*;

    #[test]
    fn read_rejects_oversized_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("big.html");
        fs::write(&path, "0123456789").expect("write fixture");
        let store = LocalFileStore::new(4);
        assert!(matches!(
            store.read_to_string(&path),
            Err(FileStoreError::TooLarge {
                limit: 4,
                ..
            })
        ));
    }

    #[test]
    fn write_replaces_content_and_keeps_mtime_settable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("menu.html");
        fs::write(&path, "old").expect("write fixture");
        let store = LocalFileStore::default();
        let before = store.modified(&path).expect("mtime");
        store.write(&path, "new").expect("write");
        store.set_modified(&path, before).expect("restore mtime");
        assert_eq!(fs::read_to_string(&path).expect("read"), "new");
        assert_eq!(store.modified(&path).expect("mtime"), before);
    }

    #[cfg(unix)]
    #[test]
    fn read_only_file_keeps_mtime_after_rewrite() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.html");
        fs::write(&path, "old").expect("write fixture");
        let mut permissions = fs::metadata(&path).expect("metadata").permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&path, permissions).expect("make read-only");
        let store = LocalFileStore::default();
        let before = store.modified(&path).expect("mtime");
        store.write(&path, "new").expect("write");
        store.set_modified(&path, before).expect("restore mtime");
        assert_eq!(fs::read_to_string(&path).expect("read"), "new");
        assert_eq!(store.modified(&path).expect("mtime"), before);
    }

    #[test]
    fn read_reports_missing_files() {
        let store = LocalFileStore::default();
        let result = store.read_to_string(Path::new("/nonexistent/neoload/report.html"));
        assert!(matches!(
            result,
            Err(FileStoreError::NotFound {
                ..
            })
        ));
    }
}
