// crates/neoload-report-core/src/core/mod.rs
// ============================================================================
// Module: NeoLoad Report Core Types
// Description: Build records, report detection, markup helpers, and log events.
// Purpose: Provide the pure, I/O-free building blocks of the report pipeline.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Core types describe the build a report belongs to and the content-level
//! rules used to recognize and patch a NeoLoad report. Nothing in this module
//! touches the filesystem.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod artifact;
pub mod detector;
pub mod events;
pub mod markup;
pub mod timestamp;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use artifact::Artifact;
pub use artifact::BuildRecord;
pub use detector::COMMENT_APPLIED_STYLE;
pub use detector::COMMENT_CSS_APPLIED_STYLE;
pub use detector::TAG_HTML_GENERATED_BY_NEOLOAD;
pub use detector::is_html_file_name;
pub use detector::is_neoload_report;
pub use events::LogLevel;
pub use events::ReportEvent;
pub use timestamp::Timestamp;
