// crates/neoload-report-core/src/core/timestamp.rs
// ============================================================================
// Module: NeoLoad Report Time Model
// Description: Millisecond timestamps for build start and file modification.
// Purpose: Compare build and file times on a single, explicit scale.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Build start times come from the host build record and file times come from
//! filesystem metadata. Both are normalized to unix epoch milliseconds before
//! any comparison so freshness decisions never depend on platform precision.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Time Values
// ============================================================================

/// Unix epoch timestamp with millisecond precision.
///
/// # Invariants
/// - Values are supplied by callers or derived from filesystem metadata; the
///   pipeline never reads wall-clock time to make a decision.
/// - Times before the epoch are negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from unix epoch milliseconds.
    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as unix epoch milliseconds.
    #[must_use]
    pub const fn as_unix_millis(self) -> i64 {
        self.0
    }

    /// Converts a [`SystemTime`] into a millisecond timestamp, saturating at
    /// the `i64` range.
    #[must_use]
    pub fn from_system_time(value: SystemTime) -> Self {
        match value.duration_since(UNIX_EPOCH) {
            Ok(after) => Self(i64::try_from(after.as_millis()).unwrap_or(i64::MAX)),
            Err(err) => {
                let before = i64::try_from(err.duration().as_millis()).unwrap_or(i64::MAX);
                Self(before.saturating_neg())
            }
        }
    }

    /// Returns true when `self` is strictly earlier than `other`.
    #[must_use]
    pub const fn is_before(self, other: Self) -> bool {
        self.0 < other.0
    }

    /// Renders the timestamp as RFC 3339 (UTC) for log messages.
    ///
    /// Falls back to the raw millisecond value when the timestamp is outside
    /// the representable calendar range.
    #[must_use]
    pub fn to_rfc3339(self) -> String {
        let nanos = i128::from(self.0) * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .ok()
            .and_then(|value| value.format(&Rfc3339).ok())
            .unwrap_or_else(|| format!("{}ms", self.0))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn system_time_round_trips_to_millis() {
        let value = UNIX_EPOCH + Duration::from_millis(1_700_000_000_123);
        assert_eq!(Timestamp::from_system_time(value).as_unix_millis(), 1_700_000_000_123);
    }

    #[test]
    fn pre_epoch_times_are_negative() {
        let value = UNIX_EPOCH - Duration::from_millis(5);
        assert_eq!(Timestamp::from_system_time(value).as_unix_millis(), -5);
    }

    #[test]
    fn equal_timestamps_are_not_before() {
        let value = Timestamp::from_unix_millis(10);
        assert!(!value.is_before(value));
        assert!(value.is_before(Timestamp::from_unix_millis(11)));
    }

    #[test]
    fn rfc3339_rendering() {
        assert_eq!(Timestamp::from_unix_millis(0).to_rfc3339(), "1970-01-01T00:00:00Z");
    }
}
