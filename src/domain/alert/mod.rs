// SPDX-License-Identifier: MPL-2.0
//! Alert domain types.
//!
//! An [`Alert`] is a single status message waiting to be shown on the
//! banner. Its [`Severity`] picks the styling and takes part in duplicate
//! detection together with the text.

mod newtypes;

pub use newtypes::{alert_duration_bounds, dedup_window_bounds, AlertDuration, DedupWindow};

/// Unique identifier for a displayed alert.
///
/// A fresh id is issued every time an alert becomes the active display, so a
/// dismiss request carrying an old id can be told apart from one aimed at
/// the banner currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

impl AlertId {
    /// Creates a new unique alert ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual and semantic weight of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Progress or confirmation (green banner).
    #[default]
    Success,
    /// Something went wrong or access was refused (red banner).
    Error,
}

impl Severity {
    /// Maps the boolean error flag used by callers and push events.
    #[must_use]
    pub fn from_error_flag(is_error: bool) -> Self {
        if is_error {
            Severity::Error
        } else {
            Severity::Success
        }
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }
}

/// A request to show a message on the banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    text: String,
    duration: AlertDuration,
    severity: Severity,
}

impl Alert {
    /// Creates an alert with an explicit severity and duration.
    pub fn new(severity: Severity, text: impl Into<String>, duration: AlertDuration) -> Self {
        Self {
            text: text.into(),
            duration,
            severity,
        }
    }

    /// Creates a success alert with the default duration.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Severity::Success, text, AlertDuration::default())
    }

    /// Creates an error alert with the default duration.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text, AlertDuration::default())
    }

    /// Replaces the display duration.
    #[must_use]
    pub fn with_duration(mut self, duration: AlertDuration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn duration(&self) -> AlertDuration {
        self.duration
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns whether `other` would be considered the same message for
    /// duplicate suppression. Duration does not take part.
    #[must_use]
    pub fn same_message(&self, text: &str, severity: Severity) -> bool {
        self.severity == severity && self.text == text
    }
}
