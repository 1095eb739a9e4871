// SPDX-License-Identifier: MPL-2.0
//! Alert activity records.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::alerts::DismissReason;

/// Something the alert queue did.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AlertEventKind {
    /// Accepted and queued.
    Submitted {
        text: String,
        is_error: bool,
        duration_ms: u64,
    },

    /// Dropped as a duplicate of a recent submission.
    Suppressed { text: String, is_error: bool },

    /// Refused because of an invalid duration.
    Rejected { text: String, reason: String },

    /// Handed to the presentation surface.
    Displayed { id: u64, text: String, is_error: bool },

    /// Removed from the presentation surface.
    Dismissed { id: u64, reason: DismissReason },
}

/// A timestamped alert activity record.
#[derive(Debug, Clone)]
pub struct AlertEvent {
    pub timestamp: Instant,
    pub kind: AlertEventKind,
}

impl AlertEvent {
    #[must_use]
    pub fn with_timestamp(kind: AlertEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_timestamp_keeps_the_given_time() {
        let at = Instant::now();
        let event = AlertEvent::with_timestamp(
            AlertEventKind::Suppressed {
                text: "A".into(),
                is_error: false,
            },
            at,
        );
        assert_eq!(event.timestamp, at);
    }

    #[test]
    fn kind_serializes_with_type_tag() {
        let kind = AlertEventKind::Dismissed {
            id: 7,
            reason: DismissReason::Timer,
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"dismissed\""));
        assert!(json.contains("\"reason\":\"timer\""));
    }

    #[test]
    fn kind_deserializes_from_json() {
        let json = r#"{"type":"rejected","text":"A","reason":"non-positive"}"#;
        let kind: AlertEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(
            kind,
            AlertEventKind::Rejected {
                text: "A".into(),
                reason: "non-positive".into()
            }
        );
    }
}
