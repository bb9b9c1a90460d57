use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration stored as `config.toml` in the data directory.
/// A missing file loads as defaults so fresh installs need no setup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Label applied to records when `--label` is not given.
    #[serde(default)]
    pub default_label: Option<String>,

    /// Session id applied when `--session` is not given.
    #[serde(default)]
    pub default_session: Option<String>,
}

impl Config {
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
