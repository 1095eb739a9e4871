// SPDX-License-Identifier: MPL-2.0
//! Serializable diagnostics report.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AlertEventKind;

/// Report header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// Crate version that produced the report.
    pub version: String,
    /// When collection started (wall clock, RFC 3339).
    pub collection_started_at: DateTime<Utc>,
    /// When the report was generated (wall clock, RFC 3339).
    pub generated_at: DateTime<Utc>,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at,
            generated_at: Utc::now(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// An event with its time expressed relative to collection start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started.
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: AlertEventKind,
}

impl SerializableEvent {
    /// Events recorded before `collection_start` get offset 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(event_timestamp: Instant, collection_start: Instant, kind: AlertEventKind) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;
        Self { timestamp_ms, kind }
    }
}

/// Complete export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn serializable_event_uses_relative_time() {
        let start = Instant::now();
        let event = SerializableEvent::new(
            start + Duration::from_millis(1250),
            start,
            AlertEventKind::Suppressed {
                text: "A".into(),
                is_error: false,
            },
        );
        assert_eq!(event.timestamp_ms, 1250);
    }

    #[test]
    fn serializable_event_before_start_is_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let event = SerializableEvent::new(
            Instant::now(),
            start,
            AlertEventKind::Suppressed {
                text: "A".into(),
                is_error: true,
            },
        );
        assert_eq!(event.timestamp_ms, 0);
    }

    #[test]
    fn flattened_event_json_has_type_and_timestamp() {
        let event = SerializableEvent {
            timestamp_ms: 42,
            kind: AlertEventKind::Displayed {
                id: 1,
                text: "Connected to backend".into(),
                is_error: false,
            },
        };
        let json = serde_json::to_string(&event).expect("serialization should succeed");
        assert!(json.contains("\"timestamp_ms\":42"));
        assert!(json.contains("\"type\":\"displayed\""));
    }
}
