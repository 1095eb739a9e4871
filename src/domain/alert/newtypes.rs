// SPDX-License-Identifier: MPL-2.0
//! Alert newtypes.
//!
//! This module provides type-safe wrappers for alert timing values,
//! ensuring they are always within valid ranges.

use crate::domain::error::DurationError;
use std::time::Duration;

// =============================================================================
// Alert Duration Bounds
// =============================================================================

/// Display duration bounds (exclusive 0 to 3600 seconds).
pub mod alert_duration_bounds {
    /// Maximum display duration in seconds.
    pub const MAX_SECS: f64 = 3600.0;
    /// Default display duration in seconds.
    pub const DEFAULT_SECS: f64 = 5.0;
}

// =============================================================================
// AlertDuration
// =============================================================================

/// How long an alert stays on screen before it is dismissed automatically.
///
/// Unlike the clamped newtypes elsewhere, invalid input is rejected: a
/// zero, negative or non-finite duration is a caller bug, not a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AlertDuration(Duration);

impl AlertDuration {
    /// Validates a duration given in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`DurationError`] when `secs` is NaN or infinite, not
    /// strictly positive (including values too small to represent), or
    /// above [`alert_duration_bounds::MAX_SECS`].
    pub fn from_secs_f64(secs: f64) -> Result<Self, DurationError> {
        if !secs.is_finite() {
            return Err(DurationError::NotFinite(secs));
        }
        if secs <= 0.0 {
            return Err(DurationError::NonPositive(secs));
        }
        if secs > alert_duration_bounds::MAX_SECS {
            return Err(DurationError::TooLong(secs));
        }
        let duration = Duration::from_secs_f64(secs);
        // Values below one nanosecond round down to zero.
        if duration.is_zero() {
            return Err(DurationError::NonPositive(secs));
        }
        Ok(Self(duration))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.0.as_secs_f64()
    }
}

impl Default for AlertDuration {
    fn default() -> Self {
        Self(Duration::from_secs_f64(alert_duration_bounds::DEFAULT_SECS))
    }
}

// =============================================================================
// Dedup Window Bounds
// =============================================================================

/// Duplicate suppression window bounds (0 to 60000 milliseconds).
pub mod dedup_window_bounds {
    /// Minimum window; zero disables suppression.
    pub const MIN_MS: u64 = 0;
    /// Maximum window.
    pub const MAX_MS: u64 = 60_000;
    /// Default window.
    pub const DEFAULT_MS: u64 = 3_000;
}

// =============================================================================
// DedupWindow
// =============================================================================

/// Time during which an identical alert is dropped instead of queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupWindow(Duration);

impl DedupWindow {
    /// Creates a window, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms.clamp(
            dedup_window_bounds::MIN_MS,
            dedup_window_bounds::MAX_MS,
        )))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns whether an entry of the given age is still inside the window.
    #[must_use]
    pub fn contains(self, age: Duration) -> bool {
        age < self.0
    }
}

impl Default for DedupWindow {
    fn default() -> Self {
        Self(Duration::from_millis(dedup_window_bounds::DEFAULT_MS))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_duration_is_five_seconds() {
        assert_eq!(AlertDuration::default().as_duration(), Duration::from_secs(5));
    }

    #[test]
    fn accepts_fractional_seconds() {
        let d = AlertDuration::from_secs_f64(0.25).expect("valid duration");
        assert_eq!(d.as_duration(), Duration::from_millis(250));
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(
            AlertDuration::from_secs_f64(0.0),
            Err(DurationError::NonPositive(0.0))
        );
        assert_eq!(
            AlertDuration::from_secs_f64(-1.5),
            Err(DurationError::NonPositive(-1.5))
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            AlertDuration::from_secs_f64(f64::NAN),
            Err(DurationError::NotFinite(_))
        ));
        assert!(matches!(
            AlertDuration::from_secs_f64(f64::INFINITY),
            Err(DurationError::NotFinite(_))
        ));
    }

    #[test]
    fn rejects_above_maximum() {
        assert!(AlertDuration::from_secs_f64(alert_duration_bounds::MAX_SECS).is_ok());
        assert_eq!(
            AlertDuration::from_secs_f64(alert_duration_bounds::MAX_SECS + 1.0),
            Err(DurationError::TooLong(alert_duration_bounds::MAX_SECS + 1.0))
        );
    }

    #[test]
    fn rejects_sub_nanosecond_values() {
        assert_eq!(
            AlertDuration::from_secs_f64(1e-12),
            Err(DurationError::NonPositive(1e-12))
        );
        assert_eq!(
            AlertDuration::from_secs_f64(1e-9).map(AlertDuration::as_duration),
            Ok(Duration::from_nanos(1))
        );
    }

    #[test]
    fn dedup_window_defaults_to_three_seconds() {
        assert_eq!(DedupWindow::default().as_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn dedup_window_clamps_to_maximum() {
        assert_eq!(
            DedupWindow::from_millis(1_000_000).as_duration(),
            Duration::from_millis(dedup_window_bounds::MAX_MS)
        );
    }

    #[test]
    fn dedup_window_boundary_is_exclusive() {
        let window = DedupWindow::default();
        assert!(window.contains(Duration::from_millis(2999)));
        assert!(!window.contains(Duration::from_millis(3000)));
    }

    #[test]
    fn zero_window_contains_nothing() {
        let window = DedupWindow::from_millis(0);
        assert!(!window.contains(Duration::ZERO));
    }
}
