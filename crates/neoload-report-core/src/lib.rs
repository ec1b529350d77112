// crates/neoload-report-core/src/lib.rs
// ============================================================================
// Module: NeoLoad Report Core Library
// Description: Public API surface for the NeoLoad report integration core.
// Purpose: Expose report detection, freshness, patching, and sidebar links.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! The core locates the NeoLoad HTML report among a build's artifacts, checks
//! that the report was produced by the current build, and patches the report
//! frameset so it renders inside the CI sidebar panel. Hosts integrate through
//! the [`ReportFileStore`] and [`ReportLogSink`] interfaces; the pipeline itself
//! is synchronous and never reads the wall clock for decisions.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::FileStoreError;
pub use interfaces::ReportFileStore;
pub use interfaces::ReportLogSink;
pub use runtime::BuildAction;
pub use runtime::BuildActions;
pub use runtime::DEFAULT_MAX_REPORT_BYTES;
pub use runtime::FileLogSink;
pub use runtime::FreshnessCheck;
pub use runtime::FreshnessError;
pub use runtime::LevelFilterSink;
pub use runtime::LocalFileStore;
pub use runtime::LocateError;
pub use runtime::LocatedReport;
pub use runtime::LocatorConfig;
pub use runtime::MemoryLogSink;
pub use runtime::NoopLogSink;
pub use runtime::PatchError;
pub use runtime::PatchOutcome;
pub use runtime::ReportLinks;
pub use runtime::ReportLocator;
pub use runtime::Resolution;
pub use runtime::SidebarPresentation;
pub use runtime::StderrLogSink;
