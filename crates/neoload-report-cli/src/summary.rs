// crates/neoload-report-cli/src/summary.rs
// ============================================================================
// Module: Sidebar Summary
// Description: Snapshot of the sidebar accessors for one build.
// Purpose: Give the `sidebar` command a serializable, renderable result.
// Dependencies: neoload-report-core, serde
// ============================================================================

//! ## Overview
//! [`SidebarSummary`] queries every accessor of a [`ReportLinks`] group once
//! and records the answers. Either all presentation fields are present or
//! none are.

// ============================================================================
// SECTION: Imports
// ============================================================================

use neoload_report_core::LocateError;
use neoload_report_core::ReportLinks;
use serde::Serialize;

use crate::t;

// ============================================================================
// SECTION: Summary
// ============================================================================

/// Resolved sidebar state of one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarSummary {
    /// Build number.
    pub build_number: u64,
    /// Owning job name.
    pub job_name: String,
    /// Whether a fresh report was found.
    pub found: bool,
    /// Report href relative to the artifact root.
    pub href: Option<String>,
    /// Sidebar label.
    pub display_name: Option<String>,
    /// Sidebar icon path.
    pub icon_file_name: Option<String>,
    /// Sidebar URL slug.
    pub url_name: Option<String>,
}

impl SidebarSummary {
    /// Resolves `links` and captures every accessor.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError`] when the locator runs in strict mode and a scan
    /// step fails.
    pub fn resolve(links: &mut ReportLinks) -> Result<Self, LocateError> {
        let href = links.html_report_href()?;
        let display_name = links.display_name()?.map(str::to_string);
        let icon_file_name = links.icon_file_name()?.map(str::to_string);
        let url_name = links.url_name()?.map(str::to_string);
        let build = links.build();
        Ok(Self {
            build_number: build.number,
            job_name: build.job_name.clone(),
            found: href.is_some(),
            href,
            display_name,
            icon_file_name,
            url_name,
        })
    }

    /// Renders the summary as human-readable lines.
    #[must_use]
    pub fn render_text(&self) -> Vec<String> {
        match (&self.href, &self.display_name, &self.url_name, &self.icon_file_name) {
            (Some(href), Some(display_name), Some(url_name), Some(icon)) => vec![
                t!("sidebar.found", display_name = display_name, url_name = url_name, href = href),
                t!("sidebar.icon", icon = icon),
            ],
            _ => vec![t!("sidebar.not_found", build = self.build_number, job = self.job_name)],
        }
    }
}
