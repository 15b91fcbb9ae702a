//! Application configuration loaded from environment variables.

use thiserror::Error;
use webflow::WebflowConfig;

/// Configuration that cannot be turned into a running server.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// Server configuration.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `5000`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `DATABASE_URL`: PostgreSQL connection string; the in-memory store is
///   used when unset
/// - `WEBFLOW_API_KEY`, `WEBFLOW_COLLECTION_ID`: required
/// - `WEBFLOW_API_BASE_URL`, `WEBFLOW_API_VERSION`: optional overrides
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database_url: Option<String>,
    pub webflow: WebflowConfig,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let mut webflow = WebflowConfig::new(
            require("WEBFLOW_API_KEY")?,
            require("WEBFLOW_COLLECTION_ID")?,
        );
        if let Some(base_url) = get("WEBFLOW_API_BASE_URL") {
            webflow = webflow.with_base_url(base_url);
        }
        if let Some(version) = get("WEBFLOW_API_VERSION") {
            webflow = webflow.with_api_version(version);
        }

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: get("PORT").and_then(|p| p.parse().ok()).unwrap_or(5000),
            log_level: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            database_url: get("DATABASE_URL"),
            webflow,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
