use super::defaults::{DEFAULT_ALLOW_FORCE, DEFAULT_CONFIG_PATH, DEFAULT_PORT, DEFAULT_SYSTEM_ROOT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub config_path: String,
    /// Reference "root" for the mount-boundary check and end of the
    /// ancestor walk. `/` on any single-rooted system.
    pub system_root: String,
    /// Honor `force` in validation requests.
    pub allow_force: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            system_root: DEFAULT_SYSTEM_ROOT.to_string(),
            allow_force: DEFAULT_ALLOW_FORCE,
        }
    }
}

impl AppConfig {
    /// Load configuration, merging defaults with config file values and env overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("BG_CONFIG_PATH") {
            config.config_path = path;
        }

        let cfg_path = Path::new(&config.config_path);
        if cfg_path.exists() {
            let contents = fs::read_to_string(cfg_path)
                .with_context(|| format!("Failed to read config file: {}", config.config_path))?;
            config.parse_ini(&contents);
        }

        // Environment wins over the file.
        if let Ok(port) = std::env::var("BG_PORT") {
            config.port = port.parse().context("BG_PORT must be a valid port number")?;
        }
        if let Ok(root) = std::env::var("BG_SYSTEM_ROOT") {
            config.system_root = root;
        }

        config.validate()?;
        Ok(config)
    }
}
