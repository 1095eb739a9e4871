// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing alert activity.

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    AlertEvent, AlertEventKind, AlertReport, BufferCapacity, CircularBuffer, ReportMetadata,
    SerializableEvent,
};
use crate::error::Result;

/// Handle for sending alert activity to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<AlertEvent>,
}

impl DiagnosticsHandle {
    /// Records an event with an explicit timestamp (from the queue's clock).
    ///
    /// Non-blocking; the event is dropped if the channel is full.
    pub fn log_at(&self, kind: AlertEventKind, timestamp: Instant) {
        let _ = self
            .event_tx
            .try_send(AlertEvent::with_timestamp(kind, timestamp));
    }
}

/// Central collector for alert activity.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<AlertEvent>,
    event_rx: Receiver<AlertEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<AlertEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::starting_at(capacity, Instant::now())
    }

    /// Creates a collector whose report offsets are measured from `started_at`.
    ///
    /// Pass the queue clock's current time when driving a manual clock.
    #[must_use]
    pub fn starting_at(capacity: BufferCapacity, started_at: Instant) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: started_at,
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves all pending events from the channel into the buffer.
    ///
    /// Call this periodically (e.g., on each UI tick).
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &AlertEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Builds a report from the current buffer contents.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn report(&self) -> AlertReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        AlertReport {
            metadata: ReportMetadata::new(
                self.collection_started_at_utc,
                collection_duration_ms,
                events.len(),
            ),
            events,
        }
    }

    /// Exports all collected events as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.report())
    }

    /// Writes the JSON report to `path`.
    ///
    /// The report goes to a sibling `.json.tmp` file first and is renamed
    /// into place.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        let json = self.export_json()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::DismissReason;
    use std::time::Duration;
    use tempfile::tempdir;

    fn suppressed(text: &str) -> AlertEventKind {
        AlertEventKind::Suppressed {
            text: text.to_string(),
            is_error: false,
        }
    }

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_at(suppressed("A"), Instant::now());
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn buffer_capacity_bounds_retained_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
        let handle = collector.handle();
        for n in 0..40 {
            handle.log_at(suppressed(&n.to_string()), Instant::now());
        }
        collector.process_pending();

        assert_eq!(collector.len(), 16);
        assert_eq!(collector.capacity(), 16);
        assert_eq!(
            collector.iter().next().map(|event| event.kind.clone()),
            Some(suppressed("24"))
        );
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(4096));
        let handle = collector.handle();
        for _ in 0..DEFAULT_CHANNEL_CAPACITY + 10 {
            handle.log_at(suppressed("A"), Instant::now());
        }
        collector.process_pending();

        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn report_offsets_follow_event_timestamps() {
        let start = Instant::now();
        let mut collector = DiagnosticsCollector::starting_at(BufferCapacity::default(), start);
        let handle = collector.handle();
        handle.log_at(
            AlertEventKind::Dismissed {
                id: 3,
                reason: DismissReason::User,
            },
            start + Duration::from_millis(800),
        );
        collector.process_pending();

        let report = collector.report();
        assert_eq!(report.metadata.event_count, 1);
        assert_eq!(report.events[0].timestamp_ms, 800);
    }

    #[test]
    fn export_json_round_trips() {
        let mut collector = DiagnosticsCollector::default();
        collector
            .handle()
            .log_at(suppressed("Removed from chat"), Instant::now());
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        let report: AlertReport = serde_json::from_str(&json).expect("valid report json");
        assert_eq!(report.events.len(), 1);
        assert_eq!(report.events[0].kind, suppressed("Removed from chat"));
    }

    #[test]
    fn export_to_file_creates_parent_directories() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("reports").join("alerts.json");
        let collector = DiagnosticsCollector::default();

        collector.export_to_file(&path).expect("export should succeed");
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
