//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the taskflow application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use taskflow_store::storage::is_valid_key;

use crate::error::{ConfigError, Result};
use crate::persistence::{default_data_dir, find_config_file, read_config_file, write_config_file};
use crate::timing::TimingConfig;

/// Storage key the task list is kept under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "tm_tasks_v1";

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_seed_on_first_run() -> bool {
    true
}

/// The main configuration struct for the taskflow application.
///
/// # Examples
///
/// ```
/// use taskflow_config::{Config, TimingConfig};
///
/// let config = Config::default();
/// assert_eq!(config.storage_key, "tm_tasks_v1");
/// assert!(config.seed_on_first_run);
///
/// let config = Config {
///     timing: TimingConfig::new(100, 500),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Storage key the task list is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Directory holding storage files.
    ///
    /// Defaults to `storage/` inside the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Whether to start with example tasks when nothing is stored yet.
    #[serde(default = "default_seed_on_first_run")]
    pub seed_on_first_run: bool,

    /// UI delays.
    #[serde(default)]
    pub timing: TimingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            data_dir: None,
            seed_on_first_run: true,
            timing: TimingConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskflow_config::Config;
    ///
    /// # fn example() -> taskflow_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage key would be refused by
    /// [`taskflow_store::storage::is_valid_key`], or a delay is out of range.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_key(&self.storage_key) {
            return Err(ConfigError::InvalidStorageKey(self.storage_key.clone()));
        }
        self.timing.validate()?;
        Ok(())
    }

    /// Returns the directory storage files are kept in.
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is configured and the platform data
    /// directory cannot be determined.
    pub fn storage_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(default_data_dir()?.join("storage")),
        }
    }
}
