// crates/neoload-report-cli/src/lib.rs
// ============================================================================
// Module: NeoLoad Report CLI Library
// Description: Shared helpers for the neoload-report command-line interface.
// Purpose: Provide reusable components for the CLI binary and tests.
// Dependencies: neoload-report-core, serde, walkdir
// ============================================================================

//! ## Overview
//! This library houses the CLI pieces worth testing on their own: the message
//! catalog, artifact store enumeration, and the sidebar summary rendered by
//! the `sidebar` command. The binary entry point (`src/main.rs`) only parses
//! arguments and wires these together.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod artifacts;
/// Internationalization helpers and message catalog.
pub mod i18n;
pub mod summary;
