// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[alerts]` - Default display duration, duplicate window, refuse message
//! - `[banner]` - Countdown bar and tick rate
//! - `[diagnostics]` - Activity buffer size
//!
//! Every field is optional; missing fields fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use sync_alerts::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.alerts.dedup_window_ms = Some(5000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::alerts::QueueSettings;
use crate::domain::alert::{AlertDuration, DedupWindow};
use crate::domain::diagnostics::BufferCapacity;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Alert queue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertsConfig {
    /// Display duration in seconds for alerts that do not specify one.
    #[serde(
        default = "default_alert_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_secs: Option<f64>,

    /// Window in milliseconds during which identical alerts are dropped.
    #[serde(
        default = "default_dedup_window_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub dedup_window_ms: Option<u64>,

    /// Text shown when the server refuses the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refuse_message: Option<String>,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: default_alert_duration_secs(),
            dedup_window_ms: default_dedup_window_ms(),
            refuse_message: Some(DEFAULT_REFUSE_MESSAGE.to_string()),
        }
    }
}

/// Banner presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerConfig {
    /// Whether the countdown bar is drawn.
    #[serde(default = "default_show_countdown", skip_serializing_if = "Option::is_none")]
    pub show_countdown: Option<bool>,

    /// How often the queue is polled for expired alerts (milliseconds).
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            show_countdown: default_show_countdown(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of activity records kept in memory.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub alerts: AlertsConfig,

    #[serde(default)]
    pub banner: BannerConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Builds the queue settings, falling back to defaults for invalid values.
    ///
    /// An out-of-range default duration in the file must not prevent the
    /// application from starting, so it is reported on stderr and replaced.
    #[must_use]
    pub fn queue_settings(&self) -> QueueSettings {
        let default_duration = match self.alerts.default_duration_secs {
            Some(secs) => AlertDuration::from_secs_f64(secs).unwrap_or_else(|err| {
                eprintln!("[WARN] Ignoring alerts.default_duration_secs: {err}");
                AlertDuration::default()
            }),
            None => AlertDuration::default(),
        };
        let dedup_window = self
            .alerts
            .dedup_window_ms
            .map_or_else(DedupWindow::default, DedupWindow::from_millis);

        QueueSettings {
            dedup_window,
            default_duration,
        }
    }

    /// Text used for `refuse` push events.
    #[must_use]
    pub fn refuse_message(&self) -> &str {
        self.alerts
            .refuse_message
            .as_deref()
            .unwrap_or(DEFAULT_REFUSE_MESSAGE)
    }

    /// Tick interval, clamped to the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let ms = self
            .banner
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn show_countdown(&self) -> bool {
        self.banner.show_countdown.unwrap_or(true)
    }

    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        self.diagnostics
            .buffer_capacity
            .map_or_else(BufferCapacity::default, BufferCapacity::new)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_alert_duration_secs() -> Option<f64> {
    Some(DEFAULT_ALERT_DURATION_SECS)
}

fn default_dedup_window_ms() -> Option<u64> {
    Some(DEFAULT_DEDUP_WINDOW_MS)
}

fn default_show_countdown() -> Option<bool> {
    Some(true)
}

fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "Could not read {}, using defaults ({err})",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_matches_defaults() {
        let config = Config::default();
        assert_eq!(config.alerts.dedup_window_ms, Some(DEFAULT_DEDUP_WINDOW_MS));
        assert_eq!(config.refuse_message(), DEFAULT_REFUSE_MESSAGE);
        assert_eq!(config.queue_settings(), QueueSettings::default());
        assert!(config.show_countdown());
    }

    #[test]
    fn save_and_load_round_trip() {
        let mut config = Config::default();
        config.alerts.default_duration_secs = Some(8.0);
        config.alerts.refuse_message = Some("Session closed by server".to_string());
        config.banner.show_countdown = Some(false);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &path).expect("failed to save config");
        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[alerts]\ndedup_window_ms = 1500\n").expect("failed to write config");

        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded.alerts.dedup_window_ms, Some(1500));
        assert_eq!(
            loaded.alerts.default_duration_secs,
            Some(DEFAULT_ALERT_DURATION_SECS)
        );
        assert_eq!(loaded.banner, BannerConfig::default());
    }

    #[test]
    fn load_from_path_errors_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_falls_back() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[alerts\n").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn invalid_default_duration_falls_back() {
        let mut config = Config::default();
        config.alerts.default_duration_secs = Some(-1.0);
        assert_eq!(
            config.queue_settings().default_duration,
            AlertDuration::default()
        );
    }

    #[test]
    fn dedup_window_is_clamped() {
        let mut config = Config::default();
        config.alerts.dedup_window_ms = Some(10_000_000);
        assert_eq!(
            config.queue_settings().dedup_window,
            DedupWindow::from_millis(crate::domain::alert::dedup_window_bounds::MAX_MS)
        );
    }

    #[test]
    fn tick_interval_is_clamped() {
        let mut config = Config::default();
        config.banner.tick_interval_ms = Some(1);
        assert_eq!(config.tick_interval(), Duration::from_millis(MIN_TICK_INTERVAL_MS));
        config.banner.tick_interval_ms = Some(60_000);
        assert_eq!(config.tick_interval(), Duration::from_millis(MAX_TICK_INTERVAL_MS));
    }
}
