// crates/neoload-report-core/src/runtime/links.rs
// ============================================================================
// Module: Sidebar Report Links
// Description: Lazily resolved sidebar entry for a build's performance report.
// Purpose: Drive the sidebar link's visibility, label, icon, and target.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! A [`ReportLinks`] group belongs to one build. The first accessor call runs
//! the locate, validate, and patch pipeline; every later call reuses the
//! cached [`Resolution`]. When no report was found all accessors return
//! `None`, which hosts render as "no sidebar entry".
//!
//! ## Invariants
//! - The pipeline runs at most once per successful resolution.
//! - A strict-mode error leaves the group unresolved so the next call retries.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::artifact::BuildRecord;
use crate::runtime::locator::LocateError;
use crate::runtime::locator::ReportLocator;

// ============================================================================
// SECTION: Presentation
// ============================================================================

/// Default sidebar label.
pub const DEFAULT_DISPLAY_NAME: &str = "Performance Result";
/// Default sidebar icon resource.
pub const DEFAULT_ICON_PATH: &str = "/plugin/neoload-hudson-plugin/images/neoload-cropped.png";
/// Default URL slug of the report page.
pub const DEFAULT_URL_NAME: &str = "neoload-report";

/// Label, icon, and slug shown for a found report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarPresentation {
    /// Sidebar label.
    pub display_name: String,
    /// Icon resource path.
    pub icon_path: String,
    /// URL slug.
    pub url_name: String,
}

impl Default for SidebarPresentation {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            icon_path: DEFAULT_ICON_PATH.to_string(),
            url_name: DEFAULT_URL_NAME.to_string(),
        }
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Cached outcome of the report pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Resolution {
    /// The pipeline has not completed yet.
    #[default]
    Unresolved,
    /// A fresh report was found.
    Found,
    /// No qualifying report exists.
    NotFound,
}

/// Sidebar accessor group for one build.
#[derive(Clone)]
pub struct ReportLinks {
    /// Build the links describe.
    build: BuildRecord,
    /// Pipeline used for resolution.
    locator: ReportLocator,
    /// Values shown when a report is found.
    presentation: SidebarPresentation,
    /// Cached pipeline outcome.
    resolution: Resolution,
}

impl ReportLinks {
    /// Creates an unresolved link group with the default presentation.
    #[must_use]
    pub fn new(build: BuildRecord, locator: ReportLocator) -> Self {
        Self::with_presentation(build, locator, SidebarPresentation::default())
    }

    /// Creates an unresolved link group with a custom presentation.
    #[must_use]
    pub const fn with_presentation(
        build: BuildRecord,
        locator: ReportLocator,
        presentation: SidebarPresentation,
    ) -> Self {
        Self {
            build,
            locator,
            presentation,
            resolution: Resolution::Unresolved,
        }
    }

    /// Returns the build these links describe.
    #[must_use]
    pub const fn build(&self) -> &BuildRecord {
        &self.build
    }

    /// Returns the cached resolution without running the pipeline.
    #[must_use]
    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Runs the pipeline and returns the report href.
    ///
    /// Always runs, and refreshes the cached resolution.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError`] in strict mode when an artifact cannot be read
    /// or checked.
    pub fn html_report_href(&mut self) -> Result<Option<String>, LocateError> {
        let href = self.locator.resolve_href(&self.build)?;
        self.resolution = if href.is_some() { Resolution::Found } else { Resolution::NotFound };
        Ok(href)
    }

    /// Returns the sidebar label, or `None` when no report was found.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError`] when strict-mode resolution fails.
    pub fn display_name(&mut self) -> Result<Option<&str>, LocateError> {
        Ok(self.ensure_resolved()?.then_some(self.presentation.display_name.as_str()))
    }

    /// Returns the sidebar icon path, or `None` when no report was found.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError`] when strict-mode resolution fails.
    pub fn icon_file_name(&mut self) -> Result<Option<&str>, LocateError> {
        Ok(self.ensure_resolved()?.then_some(self.presentation.icon_path.as_str()))
    }

    /// Returns the report URL slug, or `None` when no report was found.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError`] when strict-mode resolution fails.
    pub fn url_name(&mut self) -> Result<Option<&str>, LocateError> {
        Ok(self.ensure_resolved()?.then_some(self.presentation.url_name.as_str()))
    }

    /// Resolves once and reports whether a report was found.
    fn ensure_resolved(&mut self) -> Result<bool, LocateError> {
        if self.resolution == Resolution::Unresolved {
            self.html_report_href()?;
        }
        Ok(self.resolution == Resolution::Found)
    }
}
