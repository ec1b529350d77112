// crates/neoload-report-core/src/runtime/logging.rs
// ============================================================================
// Module: Report Log Sinks
// Description: Stock sinks for structured report pipeline events.
// Purpose: Emit JSON-line logs without tying the core to a logging backend.
// Dependencies: crate::{core, interfaces}, serde_json
// ============================================================================

//! ## Overview
//! Sinks serialize [`ReportEvent`] values as JSON lines. Hosts pick stderr, an
//! append-only file, an in-memory buffer, or nothing, and may wrap any sink in
//! a [`LevelFilterSink`] to drop diagnostic detail.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use crate::core::events::LogLevel;
use crate::core::events::ReportEvent;
use crate::interfaces::ReportLogSink;

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Sink that logs JSON lines to stderr.
pub struct StderrLogSink;

impl ReportLogSink for StderrLogSink {
    fn record(&self, event: &ReportEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Sink that logs JSON lines to a file.
pub struct FileLogSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileLogSink {
    /// Opens the log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl ReportLogSink for FileLogSink {
    fn record(&self, event: &ReportEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// Sink that keeps events in memory, for hosts that render them later.
#[derive(Default)]
pub struct MemoryLogSink {
    /// Recorded events in arrival order.
    events: Mutex<Vec<ReportEvent>>,
}

impl MemoryLogSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }

    /// Returns the names of the recorded events.
    #[must_use]
    pub fn event_names(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .map(|events| events.iter().map(|event| event.event).collect())
            .unwrap_or_default()
    }
}

impl ReportLogSink for MemoryLogSink {
    fn record(&self, event: &ReportEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// No-op log sink.
pub struct NoopLogSink;

impl ReportLogSink for NoopLogSink {
    fn record(&self, _event: &ReportEvent) {}
}

/// Sink wrapper that drops events below a minimum level.
pub struct LevelFilterSink<S> {
    /// Lowest level forwarded to the inner sink.
    min_level: LogLevel,
    /// Wrapped sink.
    inner: S,
}

impl<S: ReportLogSink> LevelFilterSink<S> {
    /// Wraps `inner`, forwarding only events at or above `min_level`.
    pub const fn new(min_level: LogLevel, inner: S) -> Self {
        Self {
            min_level,
            inner,
        }
    }
}

impl<S: ReportLogSink> ReportLogSink for LevelFilterSink<S> {
    fn record(&self, event: &ReportEvent) {
        if event.level >= self.min_level {
            self.inner.record(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::EVENT_PATCH_FAILED;
    use crate::core::events::EVENT_REPORT_STALE;

    #[test]
    fn level_filter_drops_debug_events() {
        let sink = LevelFilterSink::new(LogLevel::Warn, MemoryLogSink::new());
        sink.record(&ReportEvent::new(EVENT_REPORT_STALE, LogLevel::Debug, "too old"));
        sink.record(&ReportEvent::new(EVENT_PATCH_FAILED, LogLevel::Warn, "no style"));
        assert_eq!(sink.inner.event_names(), vec![EVENT_PATCH_FAILED]);
    }

    #[test]
    fn events_serialize_as_json_lines() {
        let event = ReportEvent::new(EVENT_REPORT_STALE, LogLevel::Debug, "too old").with_build(7);
        let payload = serde_json::to_string(&event).unwrap_or_default();
        assert!(payload.contains("\"event\":\"report_stale\""));
        assert!(payload.contains("\"level\":\"debug\""));
        assert!(payload.contains("\"build_number\":7"));
    }
}
