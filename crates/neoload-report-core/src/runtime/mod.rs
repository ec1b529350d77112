// crates/neoload-report-core/src/runtime/mod.rs
// ============================================================================
// Module: NeoLoad Report Runtime
// Description: Locator, freshness validator, patcher, and sidebar links.
// Purpose: Run the locate, validate, and patch pipeline against real files.
// Dependencies: crate::{core, interfaces}, tempfile, serde_json
// ============================================================================

//! ## Overview
//! Runtime modules wire the pure core predicates to file access and logging.
//! The pipeline is a single linear pass: scan artifacts, accept the first
//! fresh NeoLoad report, patch it once, and hand its href to the sidebar.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod actions;
pub mod file_store;
pub mod freshness;
pub mod links;
pub mod locator;
pub mod logging;
pub mod patcher;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use actions::BuildAction;
pub use actions::BuildActions;
pub use file_store::DEFAULT_MAX_REPORT_BYTES;
pub use file_store::LocalFileStore;
pub use freshness::FreshnessCheck;
pub use freshness::FreshnessError;
pub use links::ReportLinks;
pub use links::Resolution;
pub use links::SidebarPresentation;
pub use locator::LocateError;
pub use locator::LocatedReport;
pub use locator::LocatorConfig;
pub use locator::ReportLocator;
pub use logging::FileLogSink;
pub use logging::LevelFilterSink;
pub use logging::MemoryLogSink;
pub use logging::NoopLogSink;
pub use logging::StderrLogSink;
pub use patcher::PatchError;
pub use patcher::PatchOutcome;
