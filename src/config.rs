//! Configuration file support.
//!
//! Serialization and deserialization of application settings, loaded from
//! the platform config directory on startup and exportable/importable as
//! plain JSON from the settings view.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Get all log levels in order from least to most verbose.
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Errors from loading or saving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file written by an incompatible client version.
    #[error("Config version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Platform endpoints
    pub api: ApiSettings,

    /// User preferences
    pub preferences: UserPreferences,
}

/// Where the platform lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the REST API (without `/api/v1`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Base URL image relative paths are resolved against
    #[serde(default = "default_asset_base_url")]
    pub asset_base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_asset_base_url() -> String {
    "http://localhost:8080/static".to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            asset_base_url: default_asset_base_url(),
        }
    }
}

/// User preferences section of the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Dark theme enabled
    #[serde(default = "default_dark_theme")]
    pub dark_theme: bool,

    /// Images requested per page in the dataset image list
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_dark_theme() -> bool {
    true
}

fn default_page_size() -> u32 {
    24
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            dark_theme: default_dark_theme(),
            page_size: default_page_size(),
            log_level: LogLevel::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api: ApiSettings::default(),
            preferences: UserPreferences::default(),
        }
    }
}

impl AppConfig {
    /// Load the config from the platform config directory, falling back to
    /// defaults if it is missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = config_file_path() else {
            return Self::default();
        };
        match Self::import(&path) {
            Ok(config) => config,
            Err(ConfigError::Io(_)) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring unusable config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save the config to the platform config directory.
    pub fn save(&self) -> Result<(), ConfigError> {
        let Some(path) = config_file_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.export(&path)
    }

    /// Read and validate a config file from an explicit path.
    pub fn import(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&data)?;
        if config.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch {
                expected: CONFIG_VERSION,
                found: config.version,
            });
        }
        Ok(config)
    }

    /// Write the config as pretty JSON to an explicit path.
    pub fn export(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Location of the config file under the platform config directory.
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("visiondesk").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.version, CONFIG_VERSION);
        assert_eq!(back.api.base_url, config.api.base_url);
        assert_eq!(back.preferences.page_size, config.preferences.page_size);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let json = r#"{"version": 1, "api": {}, "preferences": {}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert!(config.preferences.dark_theme);
        assert_eq!(config.preferences.log_level, LogLevel::Info);
    }

    #[test]
    fn test_log_level_serializes_lowercase() {
        let json = serde_json::to_string(&LogLevel::Debug).unwrap();
        assert_eq!(json, "\"debug\"");
    }
}
