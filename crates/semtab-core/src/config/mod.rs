//! Configuration management for semtab.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `semtab.toml` file
//! 3. User config `~/.config/semtab/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Formats the published-artifact directories are organized by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishFormat {
    Avro,
    Csv,
    Json,
    Rdf,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Published-artifact directory configuration.
    pub publish: PublishConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            publish: PublishConfig::default(),
        }
    }
}

/// Where published artifacts land, per format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Root data directory.
    pub data_dir: String,
    /// Publish root under the data directory.
    pub publish_dir: String,
    /// Subdirectory for Avro artifacts.
    pub avro_dir: String,
    /// Subdirectory for CSV artifacts.
    pub csv_dir: String,
    /// Subdirectory for JSON artifacts.
    pub json_dir: String,
    /// Subdirectory for RDF artifacts.
    pub rdf_dir: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            publish_dir: DEFAULT_PUBLISH_DIR.to_string(),
            avro_dir: DEFAULT_AVRO_DIR.to_string(),
            csv_dir: DEFAULT_CSV_DIR.to_string(),
            json_dir: DEFAULT_JSON_DIR.to_string(),
            rdf_dir: DEFAULT_RDF_DIR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./semtab.toml` (project local)
    /// 2. `~/.config/semtab/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        // Try project-local config first
        if Path::new("semtab.toml").exists() {
            return Self::from_file("semtab.toml");
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("semtab").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Use defaults
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        // Apply environment variable overrides
        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("SEMTAB_DATA_DIR") {
            self.publish.data_dir = dir;
        }
        if let Ok(dir) = std::env::var("SEMTAB_PUBLISH_DIR") {
            self.publish.publish_dir = dir;
        }
    }

    /// Resolved directory for one published artifact format.
    pub fn publish_dir(&self, format: PublishFormat) -> PathBuf {
        let subdir = match format {
            PublishFormat::Avro => &self.publish.avro_dir,
            PublishFormat::Csv => &self.publish.csv_dir,
            PublishFormat::Json => &self.publish.json_dir,
            PublishFormat::Rdf => &self.publish.rdf_dir,
        };
        Path::new(&self.publish.data_dir)
            .join(&self.publish.publish_dir)
            .join(subdir)
    }
}
