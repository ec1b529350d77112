// crates/neoload-report-core/src/interfaces/mod.rs
// ============================================================================
// Module: NeoLoad Report Interfaces
// Description: File access and logging contracts used by the report pipeline.
// Purpose: Keep the pipeline independent of the host's storage and logging.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The pipeline needs four file operations (read, stat, write, restore the
//! modification time) and somewhere to send log events. Hosts provide both;
//! [`crate::runtime::LocalFileStore`] and the sinks in
//! [`crate::runtime::logging`] are the stock implementations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::time::SystemTime;

use thiserror::Error;

use crate::core::events::ReportEvent;

// ============================================================================
// SECTION: File Store
// ============================================================================

/// File store errors.
#[derive(Debug, Error)]
pub enum FileStoreError {
    /// The file does not exist.
    #[error("file not found: {path}")]
    NotFound {
        /// Path that was requested.
        path: String,
    },
    /// The file exceeds the configured read limit.
    #[error("file {path} exceeds size limit of {limit} bytes")]
    TooLarge {
        /// Path that was requested.
        path: String,
        /// Configured limit in bytes.
        limit: usize,
    },
    /// The file is not valid UTF-8.
    #[error("file {path} is not valid utf-8")]
    InvalidUtf8 {
        /// Path that was requested.
        path: String,
    },
    /// Any other I/O failure.
    #[error("file io error on {path}: {message}")]
    Io {
        /// Path that was requested.
        path: String,
        /// Underlying error message.
        message: String,
    },
}

impl FileStoreError {
    /// Maps an I/O error for `path`, keeping not-found distinct.
    #[must_use]
    pub fn from_io(path: &Path, err: &std::io::Error) -> Self {
        let path = path.display().to_string();
        if err.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound {
                path,
            };
        }
        Self::Io {
            path,
            message: err.to_string(),
        }
    }
}

/// Read/write access to report files.
pub trait ReportFileStore: Send + Sync {
    /// Reads a whole file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError`] when the file is missing, too large, not
    /// UTF-8, or unreadable.
    fn read_to_string(&self, path: &Path) -> Result<String, FileStoreError>;

    /// Returns the file's last modification time.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError`] when metadata cannot be read.
    fn modified(&self, path: &Path) -> Result<SystemTime, FileStoreError>;

    /// Replaces the file's content.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError`] when the file cannot be written.
    fn write(&self, path: &Path, content: &str) -> Result<(), FileStoreError>;

    /// Sets the file's last modification time.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError`] when the time cannot be applied.
    fn set_modified(&self, path: &Path, modified: SystemTime) -> Result<(), FileStoreError>;
}

// ============================================================================
// SECTION: Log Sink
// ============================================================================

/// Destination for report pipeline events.
pub trait ReportLogSink: Send + Sync {
    /// Records an event.
    fn record(&self, event: &ReportEvent);
}
