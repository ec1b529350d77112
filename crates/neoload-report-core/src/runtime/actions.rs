// crates/neoload-report-core/src/runtime/actions.rs
// ============================================================================
// Module: Build Action Registry
// Description: Per-build list of sidebar actions with attach-once semantics.
// Purpose: Ensure a build carries at most one performance report entry.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! Hosts keep a list of sidebar actions per build. The report integration is
//! attached after every job run, so attaching must be idempotent: a build
//! that already has report links keeps them (and their cached resolution).

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::artifact::BuildRecord;
use crate::core::events::EVENT_ACTION_ATTACHED;
use crate::core::events::LogLevel;
use crate::core::events::ReportEvent;
use crate::runtime::links::ReportLinks;
use crate::runtime::links::SidebarPresentation;
use crate::runtime::locator::ReportLocator;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A sidebar action attached to a build.
#[derive(Clone)]
pub enum BuildAction {
    /// The performance report link group.
    ReportLinks(Box<ReportLinks>),
    /// An action contributed by another integration, identified by name.
    Other(String),
}

/// Ordered sidebar actions of one build.
#[derive(Clone, Default)]
pub struct BuildActions {
    /// Attached actions in insertion order.
    actions: Vec<BuildAction>,
}

impl BuildActions {
    /// Creates an empty action list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an action unconditionally.
    pub fn push(&mut self, action: BuildAction) {
        self.actions.push(action);
    }

    /// Returns the attached actions.
    #[must_use]
    pub fn actions(&self) -> &[BuildAction] {
        &self.actions
    }

    /// Returns true when report links are already attached.
    #[must_use]
    pub fn has_report_links(&self) -> bool {
        self.actions.iter().any(|action| matches!(action, BuildAction::ReportLinks(_)))
    }

    /// Returns the attached report links, if any.
    pub fn report_links_mut(&mut self) -> Option<&mut ReportLinks> {
        self.actions.iter_mut().find_map(|action| match action {
            BuildAction::ReportLinks(links) => Some(links.as_mut()),
            BuildAction::Other(_) => None,
        })
    }

    /// Attaches report links for `build` unless some are already attached.
    ///
    /// Returns true when links were attached.
    pub fn attach_report_links_if_absent(
        &mut self,
        build: &BuildRecord,
        locator: &ReportLocator,
        presentation: &SidebarPresentation,
    ) -> bool {
        if self.has_report_links() {
            return false;
        }
        let links =
            ReportLinks::with_presentation(build.clone(), locator.clone(), presentation.clone());
        self.actions.push(BuildAction::ReportLinks(Box::new(links)));
        locator.record(
            &ReportEvent::new(
                EVENT_ACTION_ATTACHED,
                LogLevel::Debug,
                format!(
                    "Added {} action to build {} of job {}",
                    presentation.display_name, build.number, build.job_name
                ),
            )
            .with_build(build.number),
        );
        true
    }
}
