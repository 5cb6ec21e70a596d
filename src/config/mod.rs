// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast timings
//! - `[contact]` - Simulated submission delay
//! - `[scroll]` - Throttle windows, navbar threshold and mobile breakpoint
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `CORE_BCI_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use core_bci_site::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Toast notification timings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Delay before a toast slides in (milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enter_delay_ms: Option<u64>,

    /// Time before a toast dismisses itself (milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_dismiss_ms: Option<u64>,

    /// Slide-out duration before removal (milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_transition_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: Some(DEFAULT_TOAST_ENTER_DELAY_MS),
            auto_dismiss_ms: Some(DEFAULT_TOAST_AUTO_DISMISS_MS),
            exit_transition_ms: Some(DEFAULT_TOAST_EXIT_MS),
        }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Duration of the simulated submission (milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulated_delay_ms: Option<u64>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: Some(DEFAULT_SIMULATED_SUBMIT_MS),
        }
    }
}

/// Scroll and resize handling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrollConfig {
    /// Throttle window for navigation highlighting (milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_throttle_ms: Option<u64>,

    /// Throttle window for the progress bar (milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_throttle_ms: Option<u64>,

    /// Throttle window for resize handling (milliseconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_throttle_ms: Option<u64>,

    /// Offset past which the navbar gets its scrolled look.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navbar_scrolled_threshold: Option<f32>,

    /// Width at or below which the hamburger menu is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_breakpoint: Option<f32>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            nav_throttle_ms: Some(DEFAULT_NAV_THROTTLE_MS),
            progress_throttle_ms: Some(DEFAULT_PROGRESS_THROTTLE_MS),
            resize_throttle_ms: Some(DEFAULT_RESIZE_THROTTLE_MS),
            navbar_scrolled_threshold: Some(DEFAULT_NAVBAR_SCROLLED_THRESHOLD),
            mobile_breakpoint: Some(DEFAULT_MOBILE_BREAKPOINT),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Toast notification timings.
    #[serde(default)]
    pub notifications: NotificationsConfig,

    /// Contact form settings.
    #[serde(default)]
    pub contact: ContactConfig,

    /// Scroll and resize handling.
    #[serde(default)]
    pub scroll: ScrollConfig,
}

fn clamped_ms(value: Option<u64>, default: u64, min: u64, max: u64) -> Duration {
    Duration::from_millis(value.unwrap_or(default).clamp(min, max))
}

impl NotificationsConfig {
    #[must_use]
    pub fn enter_delay(&self) -> Duration {
        clamped_ms(
            self.enter_delay_ms,
            DEFAULT_TOAST_ENTER_DELAY_MS,
            MIN_TOAST_ENTER_DELAY_MS,
            MAX_TOAST_ENTER_DELAY_MS,
        )
    }

    #[must_use]
    pub fn auto_dismiss(&self) -> Duration {
        clamped_ms(
            self.auto_dismiss_ms,
            DEFAULT_TOAST_AUTO_DISMISS_MS,
            MIN_TOAST_AUTO_DISMISS_MS,
            MAX_TOAST_AUTO_DISMISS_MS,
        )
    }

    #[must_use]
    pub fn exit_transition(&self) -> Duration {
        clamped_ms(
            self.exit_transition_ms,
            DEFAULT_TOAST_EXIT_MS,
            MIN_TOAST_EXIT_MS,
            MAX_TOAST_EXIT_MS,
        )
    }
}

impl ContactConfig {
    #[must_use]
    pub fn simulated_delay(&self) -> Duration {
        clamped_ms(
            self.simulated_delay_ms,
            DEFAULT_SIMULATED_SUBMIT_MS,
            MIN_SIMULATED_SUBMIT_MS,
            MAX_SIMULATED_SUBMIT_MS,
        )
    }
}

impl ScrollConfig {
    #[must_use]
    pub fn nav_throttle(&self) -> Duration {
        clamped_ms(
            self.nav_throttle_ms,
            DEFAULT_NAV_THROTTLE_MS,
            MIN_THROTTLE_MS,
            MAX_THROTTLE_MS,
        )
    }

    #[must_use]
    pub fn progress_throttle(&self) -> Duration {
        clamped_ms(
            self.progress_throttle_ms,
            DEFAULT_PROGRESS_THROTTLE_MS,
            MIN_THROTTLE_MS,
            MAX_THROTTLE_MS,
        )
    }

    #[must_use]
    pub fn resize_throttle(&self) -> Duration {
        clamped_ms(
            self.resize_throttle_ms,
            DEFAULT_RESIZE_THROTTLE_MS,
            MIN_THROTTLE_MS,
            MAX_THROTTLE_MS,
        )
    }

    #[must_use]
    pub fn navbar_scrolled_threshold(&self) -> f32 {
        self.navbar_scrolled_threshold
            .unwrap_or(DEFAULT_NAVBAR_SCROLLED_THRESHOLD)
            .max(0.0)
    }

    #[must_use]
    pub fn mobile_breakpoint(&self) -> f32 {
        self.mobile_breakpoint
            .unwrap_or(DEFAULT_MOBILE_BREAKPOINT)
            .clamp(MIN_MOBILE_BREAKPOINT, MAX_MOBILE_BREAKPOINT)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with the i18n key of a warning explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
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
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationsConfig {
                enter_delay_ms: Some(50),
                auto_dismiss_ms: Some(8_000),
                exit_transition_ms: Some(250),
            },
            contact: ContactConfig {
                simulated_delay_ms: Some(500),
            },
            scroll: ScrollConfig::default(),
        };

        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nested").join(CONFIG_FILE);
        save_to_path(&config, &path).expect("save config");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("write config");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(
            loaded.notifications.auto_dismiss(),
            Duration::from_millis(DEFAULT_TOAST_AUTO_DISMISS_MS)
        );
        assert_eq!(
            loaded.contact.simulated_delay(),
            Duration::from_millis(DEFAULT_SIMULATED_SUBMIT_MS)
        );
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_invalid_file_returns_config_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[notifications\nauto_dismiss_ms = ").expect("write config");

        match load_from_path(&path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn load_with_override_reports_warning_for_broken_file() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "general = 12").expect("write config");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let dir = tempdir().expect("temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            notifications: NotificationsConfig {
                enter_delay_ms: Some(50_000),
                auto_dismiss_ms: Some(1),
                exit_transition_ms: None,
            },
            scroll: ScrollConfig {
                nav_throttle_ms: Some(0),
                mobile_breakpoint: Some(10.0),
                ..ScrollConfig::default()
            },
            ..Config::default()
        };

        assert_eq!(
            config.notifications.enter_delay(),
            Duration::from_millis(MAX_TOAST_ENTER_DELAY_MS)
        );
        assert_eq!(
            config.notifications.auto_dismiss(),
            Duration::from_millis(MIN_TOAST_AUTO_DISMISS_MS)
        );
        assert_eq!(
            config.notifications.exit_transition(),
            Duration::from_millis(DEFAULT_TOAST_EXIT_MS)
        );
        assert_eq!(
            config.scroll.nav_throttle(),
            Duration::from_millis(MIN_THROTTLE_MS)
        );
        assert_eq!(config.scroll.mobile_breakpoint(), MIN_MOBILE_BREAKPOINT);
    }
}
