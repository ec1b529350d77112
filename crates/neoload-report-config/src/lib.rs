// crates/neoload-report-config/src/lib.rs
// ============================================================================
// Module: NeoLoad Report Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for neoload-report.toml semantics.
// Dependencies: neoload-report-core, serde, toml
// ============================================================================

//! ## Overview
//! `neoload-report-config` defines the configuration model for the NeoLoad
//! report integration: scan strictness and limits, sidebar presentation, and
//! log routing. Validation is strict and fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
