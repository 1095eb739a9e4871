// SPDX-License-Identifier: MPL-2.0
//! Alert lifecycle management.
//!
//! The `AlertQueue` accepts alerts, drops near-duplicates, shows one alert
//! at a time on its [`Surface`] and dismisses it when its countdown runs
//! out or the user closes it. Dismissal immediately promotes the next
//! pending alert, so the queue drains on its own.

use super::{ActiveAlert, Clock, RecentHistory, Surface, SystemClock};
use crate::diagnostics::{AlertEventKind, DiagnosticsHandle};
use crate::domain::alert::{Alert, AlertDuration, AlertId, DedupWindow, Severity};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Messages for alert state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The dismiss button of a specific banner was pressed.
    Dismiss(AlertId),
    /// Dismiss whatever is showing (keyboard shortcut, programmatic close).
    DismissActive,
    /// Periodic tick for checking the auto-dismiss deadline.
    Tick,
}

/// What happened to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Nothing was showing, the alert went straight to the surface.
    Displayed(AlertId),
    /// Waiting behind the active alert; `position` is 1 for next in line.
    Queued { position: usize },
    /// Same text and severity were accepted within the dedup window.
    Suppressed,
}

/// Why the active alert went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    Timer,
    User,
    Cleared,
}

/// Tunables taken from the `[alerts]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QueueSettings {
    pub dedup_window: DedupWindow,
    pub default_duration: AlertDuration,
}

/// Queues alerts and presents them one at a time.
#[derive(Debug)]
pub struct AlertQueue<S, C = SystemClock> {
    surface: S,
    clock: C,
    /// Not yet shown, oldest first.
    pending: VecDeque<Alert>,
    active: Option<ActiveAlert>,
    history: RecentHistory,
    default_duration: AlertDuration,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<S: Surface, C: Clock> AlertQueue<S, C> {
    /// Creates an idle queue with default settings.
    pub fn new(surface: S, clock: C) -> Self {
        Self::with_settings(surface, clock, QueueSettings::default())
    }

    pub fn with_settings(surface: S, clock: C, settings: QueueSettings) -> Self {
        Self {
            surface,
            clock,
            pending: VecDeque::new(),
            active: None,
            history: RecentHistory::new(settings.dedup_window),
            default_duration: settings.default_duration,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for recording queue activity.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Submits a message with a duration in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Duration`](crate::error::Error::Duration) when
    /// `duration_secs` is not finite, not positive, or above the maximum.
    /// A rejected submission leaves the queue and the dedup history untouched.
    pub fn submit(
        &mut self,
        text: impl Into<String>,
        duration_secs: f64,
        is_error: bool,
    ) -> Result<Submission> {
        let text = text.into();
        let duration = match AlertDuration::from_secs_f64(duration_secs) {
            Ok(duration) => duration,
            Err(err) => {
                self.record(|| AlertEventKind::Rejected {
                    text: text.clone(),
                    reason: err.reason().to_string(),
                });
                return Err(err.into());
            }
        };
        Ok(self.push(Alert::new(
            Severity::from_error_flag(is_error),
            text,
            duration,
        )))
    }

    /// Submits a message with the configured default duration.
    pub fn submit_default(&mut self, text: impl Into<String>, severity: Severity) -> Submission {
        let duration = self.default_duration;
        self.push(Alert::new(severity, text, duration))
    }

    /// Pushes an already validated alert.
    pub fn push(&mut self, alert: Alert) -> Submission {
        let now = self.clock.now();

        if self.history.is_recent(&alert, now) {
            self.record(|| AlertEventKind::Suppressed {
                text: alert.text().to_string(),
                is_error: alert.severity().is_error(),
            });
            return Submission::Suppressed;
        }

        self.history.record(alert.text(), alert.severity(), now);
        self.record(|| AlertEventKind::Submitted {
            text: alert.text().to_string(),
            is_error: alert.severity().is_error(),
            duration_ms: duration_millis(alert.duration().as_duration()),
        });
        self.pending.push_back(alert);

        if self.active.is_none() {
            if let Some(id) = self.display_next() {
                return Submission::Displayed(id);
            }
        }
        Submission::Queued {
            position: self.pending.len(),
        }
    }

    /// Dismisses whatever is showing.
    ///
    /// Returns `false` (and does nothing) when the queue is idle.
    pub fn dismiss(&mut self) -> bool {
        self.dismiss_with(DismissReason::User)
    }

    /// Dismisses the alert with the given id if it is still on screen.
    ///
    /// Requests for an alert that is already gone are ignored, so a late
    /// click or timer can never close the alert that replaced it.
    pub fn dismiss_id(&mut self, id: AlertId) -> bool {
        if self.active.as_ref().map(ActiveAlert::id) != Some(id) {
            return false;
        }
        self.dismiss_with(DismissReason::User)
    }

    /// Processes a tick, dismissing the active alert once its deadline has passed.
    ///
    /// Should be called periodically while the queue is busy, at the rate set
    /// by `[banner] tick_interval_ms`.
    /// Returns whether an alert was dismissed.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let expired = self
            .active
            .as_ref()
            .is_some_and(|active| active.is_expired(now));

        if expired {
            self.dismiss_with(DismissReason::Timer)
        } else {
            false
        }
    }

    /// Handles an alert message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss_id(*id);
            }
            Message::DismissActive => {
                self.dismiss();
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Drops the active alert and everything pending.
    ///
    /// The dedup history is kept: a cleared message resubmitted inside the
    /// window is still suppressed.
    pub fn clear(&mut self) {
        self.pending.clear();
        if let Some(active) = self.active.take() {
            self.surface.hide();
            self.record(|| AlertEventKind::Dismissed {
                id: active.id().value(),
                reason: DismissReason::Cleared,
            });
        }
    }

    /// Returns the alert on screen, if any.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveAlert> {
        self.active.as_ref()
    }

    /// Returns the alerts waiting to be shown, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &Alert> {
        self.pending.iter()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether nothing is showing and nothing is waiting.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.pending.is_empty()
    }

    /// Time left on the active alert's countdown.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.active.as_ref().map(|active| active.remaining(now))
    }

    /// Fraction of the active alert's countdown still left (`1.0` → `0.0`).
    #[must_use]
    pub fn remaining_fraction(&self) -> Option<f32> {
        let now = self.clock.now();
        self.active
            .as_ref()
            .map(|active| active.remaining_fraction(now))
    }

    #[must_use]
    pub fn history(&self) -> &RecentHistory {
        &self.history
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn default_duration(&self) -> AlertDuration {
        self.default_duration
    }

    /// Moves the oldest pending alert onto the surface.
    fn display_next(&mut self) -> Option<AlertId> {
        let alert = self.pending.pop_front()?;
        let active = ActiveAlert::new(alert, self.clock.now());
        let id = active.id();

        self.surface.show(&active);
        self.record(|| AlertEventKind::Displayed {
            id: id.value(),
            text: active.text().to_string(),
            is_error: active.severity().is_error(),
        });
        self.active = Some(active);
        Some(id)
    }

    fn dismiss_with(&mut self, reason: DismissReason) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };

        self.surface.hide();
        self.record(|| AlertEventKind::Dismissed {
            id: active.id().value(),
            reason,
        });
        self.display_next();
        true
    }

    fn record(&self, kind: impl FnOnce() -> AlertEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log_at(kind(), self.clock.now());
        }
    }
}

#[allow(clippy::cast_possible_truncation)] // capped at one hour
fn duration_millis(duration: Duration) -> u64 {
    duration.as_millis() as u64
}
