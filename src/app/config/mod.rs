// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[timing]` - Notification timeout and pulse duration
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_COUNTER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_counter::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.timing.notification_timeout_ms = Some(3000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::counter::Timing;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Timer durations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Auto-clear delay for notifications (milliseconds).
    #[serde(
        default = "default_notification_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub notification_timeout_ms: Option<u64>,

    /// Readout emphasis duration after a change (milliseconds).
    #[serde(
        default = "default_pulse_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub pulse_duration_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            notification_timeout_ms: default_notification_timeout_ms(),
            pulse_duration_ms: default_pulse_duration_ms(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Returns the timer durations, clamped to their supported ranges.
    #[must_use]
    pub fn timing(&self) -> Timing {
        let notification_timeout_ms = self
            .timing
            .notification_timeout_ms
            .unwrap_or(DEFAULT_NOTIFICATION_TIMEOUT_MS)
            .clamp(MIN_NOTIFICATION_TIMEOUT_MS, MAX_NOTIFICATION_TIMEOUT_MS);
        let pulse_duration_ms = self
            .timing
            .pulse_duration_ms
            .unwrap_or(DEFAULT_PULSE_DURATION_MS)
            .clamp(MIN_PULSE_DURATION_MS, MAX_PULSE_DURATION_MS);

        Timing {
            notification_timeout: Duration::from_millis(notification_timeout_ms),
            pulse_duration: Duration::from_millis(pulse_duration_ms),
        }
    }
}

fn default_notification_timeout_ms() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_TIMEOUT_MS)
}

fn default_pulse_duration_ms() -> Option<u64> {
    Some(DEFAULT_PULSE_DURATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|mut path| {
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
/// default config with a notification key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "using default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
    if let Some(path) = config_path_with_override(base_dir) {
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
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            timing: TimingConfig {
                notification_timeout_ms: Some(3500),
                pulse_duration_ms: Some(400),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[timing\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(
            config.timing.notification_timeout_ms,
            Some(DEFAULT_NOTIFICATION_TIMEOUT_MS)
        );
        assert_eq!(config.timing.pulse_duration_ms, Some(DEFAULT_PULSE_DURATION_MS));
        assert_eq!(DEFAULT_NOTIFICATION_TIMEOUT_MS, 2000);
        assert_eq!(DEFAULT_PULSE_DURATION_MS, 250);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"dark\"\n").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.timing, TimingConfig::default());
    }

    #[test]
    fn timing_is_clamped_to_bounds() {
        let config = Config {
            timing: TimingConfig {
                notification_timeout_ms: Some(1),
                pulse_duration_ms: Some(1_000_000),
            },
            ..Config::default()
        };
        let timing = config.timing();
        assert_eq!(
            timing.notification_timeout,
            Duration::from_millis(MIN_NOTIFICATION_TIMEOUT_MS)
        );
        assert_eq!(
            timing.pulse_duration,
            Duration::from_millis(MAX_PULSE_DURATION_MS)
        );
    }

    #[test]
    fn default_timing_matches_counter_default() {
        assert_eq!(Config::default().timing(), Timing::default());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save");
        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }
}
