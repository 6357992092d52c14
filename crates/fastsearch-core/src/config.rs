//! Configuration management for Fastsearch.
//!
//! Configuration is stored in TOML format in a platform-appropriate location.
//! Missing files and missing keys fall back to defaults, so a fresh install
//! needs no config at all.

use crate::error::{IndexError, Result};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default index file name, placed under the user's home directory.
const INDEX_FILE_NAME: &str = ".fastsearch_index.dat";

/// Main configuration structure for Fastsearch.
///
/// ## Example Configuration File (fastsearch.toml)
///
/// ```toml
/// [general]
/// max_results = 50
/// index_path = "/var/cache/fastsearch/index.dat"
/// log_level = "debug"
///
/// [display]
/// show_size = true
/// show_modified = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Result display settings
    pub display: DisplayConfig,
}

/// General configuration options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Maximum number of results to display per search
    pub max_results: usize,

    /// Index file location (None = default location under the home dir)
    pub index_path: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            max_results: 20,
            index_path: None,
            log_level: "info".to_string(),
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show file sizes in results
    pub show_size: bool,

    /// Show modification times in results
    pub show_modified: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_size: true,
            show_modified: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default config if no config file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }

        info!(path = %path.display(), "Loading configuration");
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents).map_err(|e| IndexError::Config {
            reason: format!("Failed to parse config: {}", e),
        })?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        info!(path = %path.display(), "Saving configuration");
        let contents = toml::to_string_pretty(self).map_err(|e| IndexError::Config {
            reason: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "fastsearch").ok_or_else(|| IndexError::Config {
            reason: "Could not determine config directory".to_string(),
        })?;

        Ok(dirs.config_dir().join("fastsearch.toml"))
    }

    /// Get the index file path (from config or default).
    ///
    /// The default lives directly under the user's home directory; when no
    /// home directory can be determined, the current directory is used.
    pub fn index_path(&self) -> PathBuf {
        if let Some(ref path) = self.general.index_path {
            return path.clone();
        }

        let home = BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        home.join(INDEX_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.max_results, 20);
        assert!(config.general.index_path.is_none());
        assert!(config.display.show_size);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let mut config = Config::default();
        config.general.max_results = 50;
        config.general.index_path = Some(PathBuf::from("/tmp/custom.dat"));

        config.save_to(&config_path).unwrap();
        let loaded = Config::load_from(&config_path).unwrap();

        assert_eq!(loaded.general.max_results, 50);
        assert_eq!(loaded.index_path(), PathBuf::from("/tmp/custom.dat"));
    }

    #[test]
    fn test_load_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.general.max_results, 20);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        fs::write(&config_path, "[general]\nmax_results = 7\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.general.max_results, 7);
        assert_eq!(config.general.log_level, "info");
        assert!(config.display.show_size);
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "not [valid toml").unwrap();

        let result = Config::load_from(&config_path);
        assert!(matches!(result, Err(IndexError::Config { .. })));
    }

    #[test]
    fn test_default_index_path_is_under_home() {
        let config = Config::default();
        let path = config.index_path();
        assert!(path.ends_with(INDEX_FILE_NAME));
    }
}
