//! Server configuration
//!
//! Settings are read from a TOML file; every field has a default so an empty
//! file (or no file at all) is a valid configuration. Command-line flags
//! override individual values after loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Default `Cache-Control` max-age for rendered grids (one day)
pub const DEFAULT_CACHE_MAX_AGE: u64 = 86_400;

/// Complete server configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub server: ListenConfig,
    pub catalog: CatalogConfig,
}

/// `[server]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListenConfig {
    /// Interface to bind to
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
    /// Seconds clients and proxies may cache a rendered grid
    pub cache_max_age: u64,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cache_max_age: DEFAULT_CACHE_MAX_AGE,
        }
    }
}

/// `[catalog]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// JSON icon dataset; the bundled sample set is used when absent
    pub path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// `Cache-Control` header value for rendered grids
    pub fn cache_control(&self) -> String {
        format!(
            "public, max-age={}, must-revalidate",
            self.server.cache_max_age
        )
    }
}
