//! Service configuration.
//!
//! Loaded from an optional TOML file, then overridden by environment
//! variables. Every field has a default so an empty config is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub docs: DocsConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins. Empty means permissive (development).
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database connection settings, including the fixed connect-retry knob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path, `:memory:`, or `sqlite://` URL (default: "clients.db")
    #[serde(default = "default_database_url")]
    pub url: String,

    /// How many times to retry the initial connection (default: 10)
    #[serde(default = "default_connect_retries")]
    pub connect_retries: u32,

    /// Ceiling on the backoff delay between retries (default: 30s)
    #[serde(default = "default_max_retry_delay_secs")]
    pub max_retry_delay_secs: u64,
}

fn default_database_url() -> String {
    "clients.db".to_string()
}

fn default_connect_retries() -> u32 {
    10
}

fn default_max_retry_delay_secs() -> u64 {
    30
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            connect_retries: default_connect_retries(),
            max_retry_delay_secs: default_max_retry_delay_secs(),
        }
    }
}

/// API documentation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Human-readable API title (default: "Client API")
    #[serde(default = "default_docs_title")]
    pub title: String,

    /// Documented API version (default: crate version)
    #[serde(default = "default_docs_version")]
    pub version: String,

    /// Path the UI page fetches the OpenAPI document from.
    #[serde(default = "default_docs_endpoint")]
    pub endpoint: String,
}

fn default_docs_title() -> String {
    "Client API".to_string()
}

fn default_docs_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_docs_endpoint() -> String {
    "/docs/openapi.json".to_string()
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            title: default_docs_title(),
            version: default_docs_version(),
            endpoint: default_docs_endpoint(),
        }
    }
}

impl AppConfig {
    /// Load configuration: file values (when a path is given), then
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config: AppConfig = match path {
            Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
            None => AppConfig::default(),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Environment variables override file values:
    /// `CLIENT_API_HOST`, `CLIENT_API_PORT`, `DATABASE_URL`.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Override application of a generic variable lookup. Tests pass an
    /// explicit map instead of mutating process-wide environment state.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("CLIENT_API_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("CLIENT_API_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(url) = var("DATABASE_URL") {
            self.database.url = url;
        }
    }
}
