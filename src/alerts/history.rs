// SPDX-License-Identifier: MPL-2.0
//! Short-lived record of accepted submissions for duplicate suppression.

use crate::domain::alert::{Alert, DedupWindow, Severity};
use std::time::Instant;

/// One accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    text: String,
    severity: Severity,
    submitted_at: Instant,
}

impl HistoryEntry {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn submitted_at(&self) -> Instant {
        self.submitted_at
    }
}

/// Submissions younger than the dedup window.
///
/// Entries are kept in submission order. Pruning only happens when a new
/// entry is recorded, so stale entries may linger between submissions;
/// [`RecentHistory::is_recent`] checks age itself and never trusts them.
#[derive(Debug, Clone, Default)]
pub struct RecentHistory {
    entries: Vec<HistoryEntry>,
    window: DedupWindow,
}

impl RecentHistory {
    #[must_use]
    pub fn new(window: DedupWindow) -> Self {
        Self {
            entries: Vec::new(),
            window,
        }
    }

    /// Returns whether the same message as `alert` was accepted within the window.
    ///
    /// Matching follows [`Alert::same_message`]: text and severity, not duration.
    #[must_use]
    pub fn is_recent(&self, alert: &Alert, now: Instant) -> bool {
        self.entries.iter().any(|entry| {
            alert.same_message(&entry.text, entry.severity)
                && self
                    .window
                    .contains(now.saturating_duration_since(entry.submitted_at))
        })
    }

    /// Records an accepted submission, then drops entries outside the window.
    pub fn record(&mut self, text: impl Into<String>, severity: Severity, now: Instant) {
        self.entries.push(HistoryEntry {
            text: text.into(),
            severity,
            submitted_at: now,
        });
        self.prune(now);
    }

    fn prune(&mut self, now: Instant) {
        let window = self.window;
        self.entries
            .retain(|entry| window.contains(now.saturating_duration_since(entry.submitted_at)));
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn window(&self) -> DedupWindow {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::AlertDuration;
    use std::time::Duration;

    #[test]
    fn identical_message_inside_window_is_recent() {
        let start = Instant::now();
        let mut history = RecentHistory::default();
        history.record("A", Severity::Success, start);

        assert!(history.is_recent(&Alert::success("A"), start + Duration::from_millis(2999)));
    }

    #[test]
    fn message_at_window_edge_is_not_recent() {
        let start = Instant::now();
        let mut history = RecentHistory::default();
        history.record("A", Severity::Success, start);

        assert!(!history.is_recent(&Alert::success("A"), start + Duration::from_millis(3000)));
    }

    #[test]
    fn severity_takes_part_in_matching() {
        let start = Instant::now();
        let mut history = RecentHistory::default();
        history.record("A", Severity::Success, start);

        assert!(!history.is_recent(&Alert::error("A"), start));
        assert!(!history.is_recent(&Alert::success("B"), start));
    }

    #[test]
    fn duration_does_not_take_part_in_matching() {
        let start = Instant::now();
        let mut history = RecentHistory::default();
        history.record("A", Severity::Success, start);

        let short = Alert::success("A")
            .with_duration(AlertDuration::from_secs_f64(1.0).expect("valid duration"));
        assert!(history.is_recent(&short, start));
    }

    #[test]
    fn recording_prunes_expired_entries() {
        let start = Instant::now();
        let mut history = RecentHistory::default();
        history.record("old", Severity::Success, start);
        history.record("also old", Severity::Error, start + Duration::from_millis(100));
        assert_eq!(history.len(), 2);

        history.record("new", Severity::Success, start + Duration::from_millis(3050));
        let texts: Vec<_> = history.entries().map(HistoryEntry::text).collect();
        assert_eq!(texts, vec!["also old", "new"]);

        history.record("newer", Severity::Success, start + Duration::from_millis(3200));
        let texts: Vec<_> = history.entries().map(HistoryEntry::text).collect();
        assert_eq!(texts, vec!["new", "newer"]);
    }

    #[test]
    fn zero_window_keeps_nothing() {
        let start = Instant::now();
        let mut history = RecentHistory::new(DedupWindow::from_millis(0));
        history.record("A", Severity::Success, start);

        assert!(history.is_empty());
        assert!(!history.is_recent(&Alert::success("A"), start));
    }
}
