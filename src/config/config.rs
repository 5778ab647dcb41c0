// SPDX-License-Identifier: GPL-3.0-only
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite database file holding the cafe table
    pub database_path: PathBuf,

    /// HTTP bind address (e.g., "127.0.0.1:5000")
    pub bind_addr: SocketAddr,

    /// Shared secret required to report a cafe closed.
    /// When unset, every delete is refused.
    pub api_key: Option<String>,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from TOML file with environment variable overrides
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`], reading variables through `env`
    pub fn load_with<F>(env: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = env("CAFE_CONFIG").unwrap_or_else(|| "config.toml".to_string());

        let mut config = Self::from_file(Path::new(&config_path))?;

        // Apply environment variable overrides
        if let Some(val) = env("CAFE_DATABASE_PATH") {
            config.database_path = PathBuf::from(val);
        }
        if let Some(val) = env("CAFE_BIND_ADDR") {
            config.bind_addr = SocketAddr::from_str(&val)?;
        }
        if let Some(val) = env("CAFE_API_KEY") {
            config.api_key = Some(val);
        }
        if let Some(val) = env("CAFE_LOG_LEVEL") {
            config.log_level = val;
        }

        Ok(config)
    }

    /// Parse a TOML file, falling back to defaults when it does not exist
    fn from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("cafes.db"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            api_key: None,
            log_level: String::from("info"),
        }
    }
}
