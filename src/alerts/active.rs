// SPDX-License-Identifier: MPL-2.0
//! The alert currently on screen.

use crate::domain::alert::{Alert, AlertId, Severity};
use std::time::{Duration, Instant};

/// An alert that has been dequeued and handed to the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveAlert {
    id: AlertId,
    alert: Alert,
    shown_at: Instant,
    deadline: Instant,
}

impl ActiveAlert {
    pub(crate) fn new(alert: Alert, shown_at: Instant) -> Self {
        let deadline = shown_at + alert.duration().as_duration();
        Self {
            id: AlertId::new(),
            alert,
            shown_at,
            deadline,
        }
    }

    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    #[must_use]
    pub fn alert(&self) -> &Alert {
        &self.alert
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.alert.text()
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.alert.severity()
    }

    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    /// When the auto-dismiss timer fires.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left before auto-dismiss, zero once expired.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }

    /// Fraction of the countdown still left, from `1.0` when shown to `0.0`
    /// at the deadline.
    #[must_use]
    pub fn remaining_fraction(&self, now: Instant) -> f32 {
        let total = self.alert.duration().as_duration().as_secs_f32();
        if total <= 0.0 {
            return 0.0;
        }
        (self.remaining(now).as_secs_f32() / total).clamp(0.0, 1.0)
    }
}
