//! Environment-driven server configuration.

use std::env;
use std::net::SocketAddr;

/// Configuration failures surfaced at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("{name} environment variable is required")]
    Missing { name: &'static str },
    /// An environment variable is set but cannot be parsed.
    #[error("{name} is invalid: {message}")]
    Invalid {
        name: &'static str,
        message: String,
    },
}

/// Server configuration assembled from the environment.
///
/// Variables:
/// - `DATABASE_URL` (required)
/// - `BIND_ADDR` (default `0.0.0.0:9090`)
/// - `DB_POOL_MAX_SIZE` (default 10)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub pool_max_size: u32,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when `DATABASE_URL` is absent or a variable
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing {
            name: "DATABASE_URL",
        })?;

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(value) => value.parse().map_err(|err| ConfigError::Invalid {
                name: "BIND_ADDR",
                message: format!("{err}"),
            })?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 9090)),
        };

        let pool_max_size = match env::var("DB_POOL_MAX_SIZE") {
            Ok(value) => value.parse().map_err(|err| ConfigError::Invalid {
                name: "DB_POOL_MAX_SIZE",
                message: format!("{err}"),
            })?,
            Err(_) => 10,
        };

        Ok(Self {
            bind_addr,
            database_url,
            pool_max_size,
        })
    }
}
