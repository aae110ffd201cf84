//! User configuration file handling
//!
//! Manages settings from ~/.config/iconfont/settings.json

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration from ~/.config/iconfont/settings.json
///
/// Every field is optional; missing values fall back to built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ConfigFile {
    /// Font compiler executable (defaults to `fontc` on the PATH)
    #[serde(default)]
    pub fontc_command: Option<String>,
    /// Log filter used when RUST_LOG is not set, e.g. "iconfont=debug"
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl ConfigFile {
    /// Get the path to the iconfont config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("iconfont")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load the user config file, `Ok(None)` when there is none
    pub fn load() -> anyhow::Result<Option<Self>> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(config))
    }

    pub fn fontc_command(&self) -> &str {
        self.fontc_command
            .as_deref()
            .unwrap_or(crate::compiler::fontc::DEFAULT_FONTC_COMMAND)
    }
}
