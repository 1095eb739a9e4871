// SPDX-License-Identifier: MPL-2.0
//! Scripted push-event replay.
//!
//! A script is a JSON-lines file. Each line is one push event envelope with
//! an `after_ms` offset from the moment playback starts:
//!
//! ```text
//! {"after_ms": 0,    "event": "progress", "data": {"message": "Connected to backend"}}
//! {"after_ms": 1200, "event": "progress", "data": {"message": "Syncing Road Trip to Tidal..."}}
//! {"after_ms": 4000, "event": "refuse"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::error::{Error, Result};
use crate::push::PushEvent;
use serde::Deserialize;
use serde_json::Value;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Debug, Deserialize)]
struct RawStep {
    #[serde(default)]
    after_ms: u64,
    event: String,
    #[serde(default)]
    data: Value,
}

/// One scheduled event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub after: Duration,
    pub event: PushEvent,
}

/// Parses a script, returning its steps ordered by offset.
///
/// Steps sharing an offset keep their file order.
///
/// # Errors
///
/// Returns [`Error::Event`] naming the first line that fails to decode.
pub fn parse(content: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_number = index + 1;
        let raw: RawStep = serde_json::from_str(line)
            .map_err(|err| Error::Event(format!("line {line_number}: {err}")))?;
        let event = PushEvent::from_parts(&raw.event, raw.data).map_err(|err| match err {
            Error::Event(msg) => Error::Event(format!("line {line_number}: {msg}")),
            other => other,
        })?;

        steps.push(ScriptStep {
            after: Duration::from_millis(raw.after_ms),
            event,
        });
    }

    steps.sort_by_key(|step| step.after);
    Ok(steps)
}

/// Plays a script back against wall-clock ticks.
#[derive(Debug, Clone)]
pub struct ScriptPlayer {
    steps: VecDeque<ScriptStep>,
    started_at: Option<Instant>,
}

impl ScriptPlayer {
    #[must_use]
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps: steps.into(),
            started_at: None,
        }
    }

    /// Reads and parses a script file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or the parse error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::new(parse(&content)?))
    }

    /// Starts the playback clock. Later calls keep the first start.
    pub fn start(&mut self, now: Instant) {
        self.started_at.get_or_insert(now);
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Removes and returns every step due at `now`, in order.
    ///
    /// Nothing is due before [`ScriptPlayer::start`] has been called.
    pub fn due(&mut self, now: Instant) -> Vec<PushEvent> {
        let Some(started_at) = self.started_at else {
            return Vec::new();
        };
        let elapsed = now.saturating_duration_since(started_at);

        let mut events = Vec::new();
        while self
            .steps
            .front()
            .is_some_and(|step| step.after <= elapsed)
        {
            if let Some(step) = self.steps.pop_front() {
                events.push(step.event);
            }
        }
        events
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.steps.is_empty()
    }
}
