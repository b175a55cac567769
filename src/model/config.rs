//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub backup: BackupConfig,
}

/// Which export line gets rewritten
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    #[serde(default = "default_variable")]
    pub variable: String,
}

fn default_variable() -> String {
    "GOPATH".to_string()
}

impl Default for TargetConfig {
    fn default() -> Self {
        TargetConfig {
            variable: default_variable(),
        }
    }
}

/// Backup configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BackupConfig {
    /// Backup file is `<rc file>.pre.<tag>`
    #[serde(default = "default_tag")]
    pub tag: String,
}

fn default_tag() -> String {
    "gos".to_string()
}

impl Default for BackupConfig {
    fn default() -> Self {
        BackupConfig { tag: default_tag() }
    }
}

impl Config {
    /// Get the gos configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("gos")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from `path`, or return default if the file doesn't exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config_err = |reason: String| Error::Config {
            path: path.to_path_buf(),
            reason,
        };

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(config_err(e.to_string()).into()),
        };
        let config: Config = toml::from_str(&content).map_err(|e| config_err(e.to_string()))?;
        config.validate().map_err(config_err)?;

        Ok(config)
    }

    /// Load configuration from the default location
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    fn validate(&self) -> Result<(), String> {
        let variable = self.target.variable.as_str();
        if variable.is_empty() {
            return Err("target.variable must not be empty".to_string());
        }
        if variable.contains(|c: char| c == '=' || c.is_whitespace()) {
            return Err(format!("invalid variable name '{}'", variable));
        }
        if self.backup.tag.is_empty() {
            return Err("backup.tag must not be empty".to_string());
        }
        Ok(())
    }
}
