// crates/neoload-report-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Fixtures
// Description: Shared build, workspace, and artifact-store fixtures.
// Purpose: Provide reusable on-disk report layouts with controlled timestamps.
// Dependencies: neoload-report-core, tempfile
// ============================================================================

//! ## Overview
//! Fixtures lay out a build workspace and an artifact store in temporary
//! directories. Workspace copies get explicit modification times relative to
//! a fixed build start so freshness decisions are deterministic.

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use neoload_report_core::Artifact;
use neoload_report_core::BuildRecord;
use neoload_report_core::LocalFileStore;
use neoload_report_core::LocatorConfig;
use neoload_report_core::MemoryLogSink;
use neoload_report_core::ReportLocator;
use neoload_report_core::Timestamp;
use tempfile::TempDir;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Fixed build start time used by all fixtures.
pub const BUILD_START_MS: i64 = 1_700_000_000_000;

/// Report page carrying the generator tag, both frame ids, a stylesheet link,
/// and a menu frame.
pub const REPORT_HTML: &str = "<html><head><title>Performance Testing Report</title>\n\
<link rel=\"stylesheet\" href=\"style.css\">\n\
</head>\n\
<!-- #HTML Report Generated by NeoLoad# -->\n\
<frameset cols=\"20%,80%\">\n\
<frame id=\"menu\" src=\"menu.html\">\n\
<frame id=\"content\" src=\"summary.html\">\n\
</frameset></html>\n";

/// Menu frame with an inline body rule.
pub const MENU_HTML: &str =
    "<html><head><style>\nbody {\n  margin: 0;\n}\n</style></head><body>menu</body></html>\n";

/// Report stylesheet.
pub const STYLE_CSS: &str = "body {\n  font-family: sans-serif;\n}\ntd { padding: 2px; }\n";

// ============================================================================
// SECTION: Fixture
// ============================================================================

/// Workspace and artifact store laid out on disk.
pub struct BuildFixture {
    /// Temporary workspace directory.
    pub workspace: TempDir,
    /// Temporary artifact store directory.
    pub store: TempDir,
    /// Artifacts registered so far, in order.
    pub artifacts: Vec<Artifact>,
}

impl BuildFixture {
    /// Creates empty workspace and store directories.
    pub fn new() -> Self {
        Self {
            workspace: tempfile::tempdir().expect("workspace tempdir"),
            store: tempfile::tempdir().expect("store tempdir"),
            artifacts: Vec::new(),
        }
    }

    /// Writes an archived artifact plus its workspace copy, the latter with
    /// a modification time `offset_ms` relative to the build start.
    pub fn add_artifact(&mut self, relative: &str, content: &str, offset_ms: i64) -> Artifact {
        let workspace_file = self.workspace_path(relative);
        write_file(&workspace_file, content);
        set_mtime(&workspace_file, BUILD_START_MS + offset_ms);
        self.add_archived_only(relative, content)
    }

    /// Writes an archived artifact with no workspace copy.
    pub fn add_archived_only(&mut self, relative: &str, content: &str) -> Artifact {
        let artifact = Artifact::from_relative(self.store.path(), relative);
        write_file(&artifact.file_path, content);
        self.artifacts.push(artifact.clone());
        artifact
    }

    /// Registers an artifact whose archived file does not exist.
    pub fn add_missing(&mut self, relative: &str) -> Artifact {
        let artifact = Artifact::from_relative(self.store.path(), relative);
        self.artifacts.push(artifact.clone());
        artifact
    }

    /// Writes a companion file (menu, stylesheet) into the artifact store.
    pub fn add_store_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.store_path(relative);
        write_file(&path, content);
        path
    }

    /// Writes the standard report, menu, and stylesheet with a fresh
    /// workspace copy of the report.
    pub fn add_standard_report(&mut self, offset_ms: i64) -> Artifact {
        self.add_store_file("menu.html", MENU_HTML);
        self.add_store_file("style.css", STYLE_CSS);
        self.add_artifact("report.html", REPORT_HTML, offset_ms)
    }

    /// Returns a path inside the artifact store.
    pub fn store_path(&self, relative: &str) -> PathBuf {
        self.store.path().join(relative)
    }

    /// Returns a path inside the workspace.
    pub fn workspace_path(&self, relative: &str) -> PathBuf {
        self.workspace.path().join(relative)
    }

    /// Builds the build record for the registered artifacts.
    pub fn build(&self) -> BuildRecord {
        BuildRecord {
            number: 42,
            job_name: "load-test".to_string(),
            started_at: Timestamp::from_unix_millis(BUILD_START_MS),
            workspace_root: Some(self.workspace.path().to_path_buf()),
            artifacts: self.artifacts.clone(),
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Creates a locator over the local filesystem with an in-memory sink.
pub fn locator(strict: bool) -> (ReportLocator, Arc<MemoryLogSink>) {
    let sink = Arc::new(MemoryLogSink::new());
    let locator = ReportLocator::new(
        LocatorConfig {
            strict,
        },
        Arc::new(LocalFileStore::default()),
        sink.clone(),
    );
    (locator, sink)
}

/// Writes a file, creating parent directories.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write fixture file");
}

/// Sets a file's modification time to `millis` since the epoch.
pub fn set_mtime(path: &Path, millis: i64) {
    let file = File::options().write(true).open(path).expect("open for mtime");
    file.set_modified(system_time(millis)).expect("set mtime");
}

/// Returns a file's modification time.
pub fn mtime(path: &Path) -> SystemTime {
    fs::metadata(path).and_then(|meta| meta.modified()).expect("read mtime")
}

/// Converts epoch milliseconds into a [`SystemTime`].
pub fn system_time(millis: i64) -> SystemTime {
    let millis = u64::try_from(millis).expect("fixture times are after the epoch");
    UNIX_EPOCH + Duration::from_millis(millis)
}

/// Reads a file as UTF-8.
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read fixture file")
}
