use super::Config;
use super::types::default_config_dir;
use crate::error::ConfigError;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load `~/.streamrules/config.toml`, writing a default file on first run.
    pub fn load_or_init() -> Result<Self> {
        let config_dir = default_config_dir();
        let config_path = config_dir.join("config.toml");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .context("Failed to create .streamrules directory")?;
        }

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self {
                config_path,
                ..Self::default()
            };
            config.save()?;
            Ok(config)
        }
    }

    /// Load an explicit config file. A leading `~` is expanded.
    pub fn load_from(path: &Path) -> Result<Self> {
        let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref());
        let contents = fs::read_to_string(&expanded).map_err(ConfigError::Io).with_context(
            || format!("Failed to read config file: {}", expanded.display()),
        )?;
        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::Load(e.to_string()))
            .with_context(|| format!("Failed to parse config file: {}", expanded.display()))?;
        config.config_path = expanded;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
