//! Configuration module

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Database file path; platform data dir when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            enabled: default_enabled(),
        }
    }
}

fn default_port() -> u16 {
    3001
}

fn default_enabled() -> bool {
    true
}

impl Config {
    /// Load config from the platform config dir, falling back to defaults
    pub fn load() -> Result<Self> {
        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                return Self::load_from(&global);
            }
        }

        Ok(Self::default())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Platform config file path (e.g. ~/.config/staffbook/config.toml)
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "staffbook").map(|d| d.config_dir().join("config.toml"))
    }

    /// Resolve the database path: config value, else platform data dir,
    /// else the current directory
    pub fn database_path(&self) -> PathBuf {
        if let Some(path) = &self.database.path {
            return path.clone();
        }

        ProjectDirs::from("", "", "staffbook")
            .map(|d| d.data_dir().join("staffbook.db"))
            .unwrap_or_else(|| PathBuf::from("staffbook.db"))
    }
}
