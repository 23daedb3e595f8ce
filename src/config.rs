//! Process configuration
//!
//! Loaded from an optional JSON file. Every key has a default, so an empty
//! object `{}` is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file (default "database.db")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Connection pool size (default 5)
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Log filter directive used when RUST_LOG is unset (default "info")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// HTTP listener settings
    #[serde(default)]
    pub server: HttpServerConfig,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("database.db")
}

fn default_max_connections() -> u32 {
    5
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            max_connections: default_max_connections(),
            log_filter: default_log_filter(),
            server: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("database_path must not be empty".into()));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::Invalid("max_connections must be > 0".into()));
        }

        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log_filter must not be empty".into()));
        }

        Ok(())
    }
}
