// SPDX-License-Identifier: MPL-2.0
//! Errors raised when an alert display duration cannot be accepted.

use std::fmt;

/// Reasons a requested display duration is rejected.
///
/// Durations arrive as seconds from callers and push events, so they are
/// carried as `f64` to report exactly what was requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationError {
    /// NaN or infinite.
    NotFinite(f64),

    /// Zero, negative, or too small to represent.
    NonPositive(f64),

    /// Longer than the maximum allowed display time.
    TooLong(f64),
}

impl DurationError {
    /// Short machine-readable reason, used in diagnostics records.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            DurationError::NotFinite(_) => "not-finite",
            DurationError::NonPositive(_) => "non-positive",
            DurationError::TooLong(_) => "too-long",
        }
    }
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationError::NotFinite(secs) => {
                write!(f, "display duration must be finite, got {}", secs)
            }
            DurationError::NonPositive(secs) => {
                write!(f, "display duration must be positive, got {}s", secs)
            }
            DurationError::TooLong(secs) => {
                write!(f, "display duration of {}s exceeds the maximum", secs)
            }
        }
    }
}

impl std::error::Error for DurationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_requested_value() {
        let err = DurationError::NonPositive(-2.0);
        assert_eq!(err.to_string(), "display duration must be positive, got -2s");
    }

    #[test]
    fn reasons_are_distinct() {
        let reasons = [
            DurationError::NotFinite(f64::INFINITY).reason(),
            DurationError::NonPositive(0.0).reason(),
            DurationError::TooLong(1e9).reason(),
        ];
        assert_ne!(reasons[0], reasons[1]);
        assert_ne!(reasons[1], reasons[2]);
        assert_ne!(reasons[0], reasons[2]);
    }
}
