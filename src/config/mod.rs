//! Configuration management for chatview.
//!
//! Handles:
//! - Default export options
//! - Display preferences
//! - Store directory override

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ChatViewError, Result};
use crate::util::atomic_write;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default export options.
    #[serde(default)]
    pub export: ExportConfig,
    /// Display options.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Load configuration from the default location, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        let config_path = default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ChatViewError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        toml::from_str(&content).map_err(|e| ChatViewError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Save configuration to the default location, atomically.
    pub fn save(&self) -> Result<()> {
        let config_path = default_config_path()?;
        self.save_to(&config_path)
    }

    /// Save configuration to a specific path, atomically.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ChatViewError::InvalidConfig {
            message: format!("Failed to serialize config: {e}"),
        })?;
        atomic_write(path, content.as_bytes())
    }
}

/// Default export options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default format for the export command (`text`, `json`, `json-pretty`).
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Truncate message previews at this length.
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_length: default_preview_length(),
        }
    }
}

/// Store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Override for the transcript store directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

// Default value functions for serde
fn default_format() -> String {
    "text".to_string()
}

fn default_preview_length() -> usize {
    80
}

/// Get the default configuration path.
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| ChatViewError::Unsupported {
        feature: "config directory discovery".to_string(),
    })?;
    Ok(config_dir.join("chatview").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.export.format, "text");
        assert_eq!(config.display.preview_length, 80);
        assert!(config.store.directory.is_none());
    }

    #[test]
    fn test_config_round_trip() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.export.format, config.export.format);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("[export]\nformat = \"json\"\n").unwrap();
        assert_eq!(parsed.export.format, "json");
        assert_eq!(parsed.display.preview_length, 80);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.store.directory = Some(PathBuf::from("/tmp/transcripts"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.store.directory, config.store.directory);
    }
}
