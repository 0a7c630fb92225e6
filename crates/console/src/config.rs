//! Console configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `FORNO_DATA_DIR` - Directory holding the persisted collection slots
//!
//! ## Optional
//! - `FORNO_CATALOG_URL` - Base URL of the catalog server whose
//!   `/api/pizzas` endpoint seeds the pizza collection
//!   (default: `http://127.0.0.1:3001`)
//! - `FORNO_HOST` - Bind address (default: 127.0.0.1)
//! - `FORNO_PORT` - Listen port (default: 3000)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Console application configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Directory holding the persisted collection slots
    pub data_dir: PathBuf,
    /// Base URL of the remote catalog server
    pub catalog_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_required_env("FORNO_DATA_DIR")?);
        let catalog_url = get_env_or_default("FORNO_CATALOG_URL", "http://127.0.0.1:3001");
        let host = get_env_or_default("FORNO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("FORNO_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("FORNO_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("FORNO_PORT".to_string(), e.to_string()))?;

        Ok(Self {
            data_dir,
            catalog_url,
            host,
            port,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get a required environment variable.
fn get_required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Get an environment variable with a default fallback.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
