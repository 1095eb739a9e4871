// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::alerts;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the alert queue (dismiss button, keyboard dismiss).
    Alert(alerts::Message),
    /// Periodic tick for auto-dismiss and script playback.
    Tick(Instant),
    /// Simulate a `progress` push event.
    SimulateProgress,
    /// Simulate a `refuse` push event.
    SimulateRefuse,
    /// Drop the active and pending alerts.
    ClearAlerts,
    /// Write the diagnostics buffer to disk.
    ExportDiagnostics,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SYNC_ALERTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional JSON-lines push event script to replay on startup.
    pub script: Option<String>,
}
