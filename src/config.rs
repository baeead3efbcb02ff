//! Configuration for the climate API server
//!
//! Values resolve from built-in defaults, then environment variables, then
//! CLI flags (applied by the binary).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Root configuration for the climate API server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// SQLite URL of the observation archive
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Interface the HTTP server binds
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the HTTP server binds
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_database_url() -> String {
    "sqlite:resources/climate.sqlite".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `DATABASE_URL`, `CLIMATE_API_HOST`,
    /// `CLIMATE_API_PORT`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(url) = env::var("DATABASE_URL") {
            config.database_url = url;
        }
        if let Ok(host) = env::var("CLIMATE_API_HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("CLIMATE_API_PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid CLIMATE_API_PORT: {port}"))?;
        }
        Ok(config)
    }

    /// Socket address string the server binds.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
