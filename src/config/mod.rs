// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast queue configuration, including loading and saving
//! it to a `toasts.toml` file.
//!
//! Only `max_notifications` and the durations affect queue semantics. `position`
//! and `enable_animations` are carried for the display layer; `enable_sound`
//! gates the optional tone effect.
//!
//! # Examples
//!
//! ```no_run
//! use toast_queue::config::{self, ToastConfig};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.max_notifications = 3;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/toasts.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.max_notifications, 3);
//! ```

pub mod defaults;

use crate::error::{Error, Result};
use crate::notifications::Kind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use defaults::{
    DEFAULT_DURATION_MS, DEFAULT_ERROR_DURATION_MS, DEFAULT_MAX_NOTIFICATIONS,
    MAX_NOTIFICATIONS_LIMIT, MIN_NOTIFICATIONS_LIMIT,
};

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "ToastQueue";

/// Screen corner or edge where the display layer stacks toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    TopCenter,
    BottomCenter,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopRight,
        Position::TopLeft,
        Position::BottomRight,
        Position::BottomLeft,
        Position::TopCenter,
        Position::BottomCenter,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::TopRight => "top-right",
            Position::TopLeft => "top-left",
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
            Position::TopCenter => "top-center",
            Position::BottomCenter => "bottom-center",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::invalid("position", format!("unknown position '{s}'")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub position: Position,
    pub default_duration_ms: i64,
    pub error_duration_ms: i64,
    pub max_notifications: usize,
    pub enable_animations: bool,
    pub enable_sound: bool,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            default_duration_ms: DEFAULT_DURATION_MS,
            error_duration_ms: DEFAULT_ERROR_DURATION_MS,
            max_notifications: DEFAULT_MAX_NOTIFICATIONS,
            enable_animations: true,
            enable_sound: false,
        }
    }
}

impl ToastConfig {
    /// Returns a copy with every numeric field clamped into its valid range.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            default_duration_ms: self
                .default_duration_ms
                .clamp(0, defaults::MAX_DURATION_MS),
            error_duration_ms: self.error_duration_ms.clamp(0, defaults::MAX_DURATION_MS),
            max_notifications: self
                .max_notifications
                .clamp(MIN_NOTIFICATIONS_LIMIT, MAX_NOTIFICATIONS_LIMIT),
            ..self.clone()
        }
    }

    /// Auto-dismiss duration applied when a producer gives none.
    /// `None` means the kind never auto-dismisses by default.
    #[must_use]
    pub fn default_duration_for(&self, kind: Kind) -> Option<i64> {
        match kind {
            Kind::Success | Kind::Info | Kind::Warning => Some(self.default_duration_ms),
            Kind::Error => Some(self.error_duration_ms),
            Kind::Loading => None,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<ToastConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ToastConfig::default())
}

pub fn save(config: &ToastConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. Unparseable content falls back to the defaults.
pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str::<ToastConfig>(&content) {
        Ok(config) => Ok(config.sanitized()),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid toast config, using defaults");
            Ok(ToastConfig::default())
        }
    }
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
