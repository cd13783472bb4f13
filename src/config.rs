use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::todos::DEFAULT_SLOT;
use crate::storage::validate_slot_name;
use crate::utils::paths::get_config_path;

/// Where the todo collection lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Name of the slot holding the serialized collection
    #[serde(default = "default_slot")]
    pub slot: String,

    /// Override for the slots directory (defaults to ~/.quicktodo/slots)
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Match search input as plain text instead of a pattern
    #[serde(default)]
    pub literal: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Ask before deleting a todo
    #[serde(default)]
    pub confirm_delete: bool,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

fn default_theme() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            confirm_delete: false,
            storage: StorageConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        validate_slot_name(&config.storage.slot)
            .with_context(|| format!("Invalid [storage] slot in {}", path.display()))?;

        Ok(config)
    }
}
