//! Configuration loading for media-search
//!
//! Configuration is loaded from:
//! 1. Environment variable MEDIA_SEARCH_CONFIG_PATH
//! 2. ~/.media-search.toml
//! 3. Default values
//!
//! Individual knobs can be overridden via environment variables
//! (MEDIA_SEARCH_USER_AGENT). Only transport behavior is configurable; the
//! minimum query length is a fixed part of the search contract.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP transport configuration
    #[serde(default)]
    pub http: HttpConfig,
}

/// HTTP transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds, applied to searches and image probes alike
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

// Default value functions
fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("media-search/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_path();

        let mut config = if let Some(path) = config_path {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content)?
            } else {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
        } else {
            tracing::info!("No config path specified, using defaults");
            Self::default()
        };

        // User agent from environment (highest priority)
        if let Ok(agent) = std::env::var("MEDIA_SEARCH_USER_AGENT") {
            config.http.user_agent = agent;
        }

        Ok(config)
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("MEDIA_SEARCH_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.media-search.toml
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home).join(".media-search.toml"));
        }

        None
    }
}
