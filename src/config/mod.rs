// SPDX-License-Identifier: MPL-2.0
//! Loading and saving visitor preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Interface language
//! - `[gallery]` - Image directory and sort order
//! - `[site]` - Header offset, booking button, timers, phone number
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set `GOLD_NAILS_CONFIG_DIR` (or pass `--config-dir`)
//! 3. Falls back to the platform config directory
//!
//! # Examples
//!
//! ```no_run
//! use gold_nails::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Order in which gallery images are listed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GalleryConfig {
    /// Directory scanned for gallery images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

/// Page behavior settings. Missing or out-of-range values fall back to the
/// defaults in [`defaults`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_header_offset_px")]
    pub header_offset_px: Option<f32>,

    #[serde(default = "default_book_button_hide_threshold_px")]
    pub book_button_hide_threshold_px: Option<f32>,

    #[serde(default = "default_wait_time_interval_secs")]
    pub wait_time_interval_secs: Option<u64>,

    #[serde(default = "default_form_reset_secs")]
    pub form_reset_secs: Option<u64>,

    #[serde(default = "default_phone")]
    pub phone: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset_px: default_header_offset_px(),
            book_button_hide_threshold_px: default_book_button_hide_threshold_px(),
            wait_time_interval_secs: default_wait_time_interval_secs(),
            form_reset_secs: default_form_reset_secs(),
            phone: default_phone(),
        }
    }
}

impl SiteConfig {
    pub fn header_offset(&self) -> f32 {
        self.header_offset_px
            .filter(|v| v.is_finite())
            .map_or(DEFAULT_HEADER_OFFSET_PX, |v| {
                v.clamp(MIN_HEADER_OFFSET_PX, MAX_HEADER_OFFSET_PX)
            })
    }

    pub fn book_button_hide_threshold(&self) -> f32 {
        self.book_button_hide_threshold_px
            .filter(|v| v.is_finite())
            .map_or(DEFAULT_BOOK_BUTTON_HIDE_THRESHOLD_PX, |v| {
                v.clamp(
                    MIN_BOOK_BUTTON_HIDE_THRESHOLD_PX,
                    MAX_BOOK_BUTTON_HIDE_THRESHOLD_PX,
                )
            })
    }

    pub fn wait_time_interval(&self) -> Duration {
        let secs = self
            .wait_time_interval_secs
            .unwrap_or(DEFAULT_WAIT_TIME_INTERVAL_SECS)
            .clamp(MIN_WAIT_TIME_INTERVAL_SECS, MAX_WAIT_TIME_INTERVAL_SECS);
        Duration::from_secs(secs)
    }

    pub fn form_reset(&self) -> Duration {
        let secs = self
            .form_reset_secs
            .unwrap_or(DEFAULT_FORM_RESET_SECS)
            .clamp(MIN_FORM_RESET_SECS, MAX_FORM_RESET_SECS);
        Duration::from_secs(secs)
    }

    pub fn phone(&self) -> &str {
        self.phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
            .unwrap_or(DEFAULT_PHONE)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub site: SiteConfig,
}

fn default_header_offset_px() -> Option<f32> {
    Some(DEFAULT_HEADER_OFFSET_PX)
}

fn default_book_button_hide_threshold_px() -> Option<f32> {
    Some(DEFAULT_BOOK_BUTTON_HIDE_THRESHOLD_PX)
}

fn default_wait_time_interval_secs() -> Option<u64> {
    Some(DEFAULT_WAIT_TIME_INTERVAL_SECS)
}

fn default_form_reset_secs() -> Option<u64> {
    Some(DEFAULT_FORM_RESET_SECS)
}

fn default_phone() -> Option<String> {
    Some(DEFAULT_PHONE.to_string())
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default location.
///
/// Returns the config and an optional i18n key for a warning to show. A
/// missing file is not a warning; an unreadable one yields defaults plus
/// `notification-config-load-error`.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "failed to load settings");
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Writes `config` to `path`, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
