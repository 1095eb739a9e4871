// SPDX-License-Identifier: MPL-2.0
//! Inbound push-channel events from the sync server.
//!
//! The server pushes two events the alert queue cares about:
//!
//! - `progress` with a `message` payload, e.g. `Syncing Road Trip to Tidal...`
//! - `refuse` with no payload, when the server drops the session
//!
//! Anything else (plain `message` chatter, `hello` acknowledgements) is
//! decoded as [`PushEvent::Other`] and ignored by [`dispatch`].
//!
//! # Wire format
//!
//! ```json
//! {"event": "progress", "data": {"message": "Connected to backend"}}
//! {"event": "refuse"}
//! ```

use crate::alerts::{AlertQueue, Clock, Severity, Submission, Surface};
use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// A decoded push-channel event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushEvent {
    /// Sync progress to show as a success banner.
    Progress { message: String },
    /// The server refused or ended the session.
    Refuse,
    /// An event with no alert mapping.
    Other { event: String },
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    event: String,
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Deserialize)]
struct ProgressData {
    message: String,
}

impl PushEvent {
    /// Decodes one JSON event envelope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Event`] when the envelope is malformed or a
    /// `progress` event lacks a string `message`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawEvent = serde_json::from_str(json)?;
        Self::from_parts(&raw.event, raw.data)
    }

    /// Builds an event from its name and payload.
    ///
    /// # Errors
    ///
    /// Same as [`PushEvent::from_json`].
    pub fn from_parts(event: &str, data: Value) -> Result<Self> {
        match event {
            "progress" => {
                let data: ProgressData = serde_json::from_value(data)
                    .map_err(|err| Error::Event(format!("progress payload: {err}")))?;
                Ok(PushEvent::Progress {
                    message: data.message,
                })
            }
            "refuse" => Ok(PushEvent::Refuse),
            other => Ok(PushEvent::Other {
                event: other.to_string(),
            }),
        }
    }
}

/// Maps push events onto queue submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventMapping {
    /// Text submitted for `refuse`.
    pub refuse_message: String,
}

impl Default for EventMapping {
    fn default() -> Self {
        Self {
            refuse_message: crate::config::DEFAULT_REFUSE_MESSAGE.to_string(),
        }
    }
}

impl EventMapping {
    #[must_use]
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            refuse_message: config.refuse_message().to_string(),
        }
    }
}

/// Submits the alert an event maps to, if any.
///
/// Progress becomes a success alert and refuse an error alert, both with
/// the queue's default duration. Returns `None` for unmapped events.
pub fn dispatch<S: Surface, C: Clock>(
    queue: &mut AlertQueue<S, C>,
    event: &PushEvent,
    mapping: &EventMapping,
) -> Option<Submission> {
    match event {
        PushEvent::Progress { message } => {
            Some(queue.submit_default(message.clone(), Severity::Success))
        }
        PushEvent::Refuse => Some(queue.submit_default(
            mapping.refuse_message.clone(),
            Severity::Error,
        )),
        PushEvent::Other { .. } => None,
    }
}
