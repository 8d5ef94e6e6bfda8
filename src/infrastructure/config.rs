// src/infrastructure/config.rs
use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DATABASE_FILE_NAME, DEFAULT_DATETIME_FORMAT,
    PREFERENCES_FILE_NAME,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for notekeep
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Empty paths mean "use the platform default location"
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub preferences: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
}

fn default_datetime_format() -> String { DEFAULT_DATETIME_FORMAT.to_string() }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            datetime_format: default_datetime_format(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(?path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Database file, from config or the platform data directory
    pub fn database_path(&self) -> Result<PathBuf> {
        if !self.storage.database.is_empty() {
            return Ok(PathBuf::from(&self.storage.database));
        }
        let data_dir = dirs::data_dir().context("Could not find data directory")?;
        Ok(data_dir.join(APP_DIR_NAME).join(DATABASE_FILE_NAME))
    }

    /// Preferences file, from config or the platform config directory
    pub fn preferences_path(&self) -> Result<PathBuf> {
        if !self.storage.preferences.is_empty() {
            return Ok(PathBuf::from(&self.storage.preferences));
        }
        Ok(default_config_dir()?.join(PREFERENCES_FILE_NAME))
    }
}

/// Default location of the config file
pub fn default_config_path() -> Result<PathBuf> {
    Ok(default_config_dir()?.join(CONFIG_FILE_NAME))
}

fn default_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not find config directory")?;
    Ok(config_dir.join(APP_DIR_NAME))
}
