// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Alerts**: Display duration, duplicate window, refuse message
//! - **Banner**: Countdown bar and tick rate
//! - **Diagnostics**: Activity buffer size

use crate::domain::alert::{alert_duration_bounds, dedup_window_bounds};
use crate::domain::diagnostics::buffer_capacity_bounds;

// ==========================================================================
// Alert Defaults
// ==========================================================================

/// Default display duration in seconds when a caller does not give one.
pub const DEFAULT_ALERT_DURATION_SECS: f64 = alert_duration_bounds::DEFAULT_SECS;

/// Default window in which an identical alert is dropped.
pub const DEFAULT_DEDUP_WINDOW_MS: u64 = dedup_window_bounds::DEFAULT_MS;

/// Text shown when the sync server refuses the session.
pub const DEFAULT_REFUSE_MESSAGE: &str = "Removed from chat";

// ==========================================================================
// Banner Defaults
// ==========================================================================

/// Interval at which the UI polls the queue for expired alerts.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Fastest allowed tick.
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Slowest allowed tick.
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of activity records retained.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_default_is_within_bounds() {
        assert!((MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&DEFAULT_TICK_INTERVAL_MS));
    }

    #[test]
    fn alert_defaults_match_the_three_second_window() {
        assert_eq!(DEFAULT_DEDUP_WINDOW_MS, 3000);
        assert!((DEFAULT_ALERT_DURATION_SECS - 5.0).abs() < f64::EPSILON);
    }
}
