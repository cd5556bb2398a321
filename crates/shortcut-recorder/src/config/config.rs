//! Configuration management for shortcut-recorder.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{LabelsConfig, LoggingConfig, ShortcutConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use shortcut_recorder_core::Shortcut;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The recorded global shortcut.
    #[serde(default)]
    pub shortcut: ShortcutConfig,
    /// Placeholder labels.
    #[serde(default)]
    pub labels: LabelsConfig,
    /// Log filtering.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from `path`, creating a default file if missing.
    #[track_caller]
    #[instrument]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            info!(config_path = ?path, "No config found, creating default");
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?path, "Configuration loaded");

        Ok(config)
    }

    /// Save configuration to `path` using atomic write pattern.
    ///
    /// Writes to a uniquely named temporary file first, then renames to
    /// prevent corruption if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = path.with_extension(format!("toml.{}.tmp", Uuid::new_v4()));

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Parse the configured binding. An empty or missing binding is `None`.
    #[track_caller]
    pub fn shortcut(&self) -> AppResult<Option<Shortcut>> {
        match self.shortcut.binding.as_deref() {
            None | Some("") => Ok(None),
            Some(binding) => Ok(Some(binding.parse::<Shortcut>()?)),
        }
    }

    /// Replace the configured binding. A cleared binding is stored as an
    /// empty string so the default does not come back on the next load.
    pub fn set_shortcut(&mut self, shortcut: Option<Shortcut>) {
        let binding = shortcut.map(|s| s.to_config_string()).unwrap_or_default();
        self.shortcut.binding = Some(binding);
    }

    /// Location of `config.toml`, creating the directory if needed.
    #[track_caller]
    pub fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "shortcut-recorder", "Shortcut-Recorder")
            .ok_or_else(|| AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }
}
