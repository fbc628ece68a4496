//! Configuration management for the Phone Validator API.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Default TCP port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration for the Phone Validator API.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind (default: "0.0.0.0")
    pub host: String,

    /// TCP port (default: 8080)
    pub port: u16,

    /// Maximum time to spend on a single request, in seconds (default: 10)
    pub request_timeout: u64,

    /// Allowed CORS origins; "*" allows any (default: ["*"])
    pub cors_origins: Vec<String>,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `HOST`: Interface to bind (default: 0.0.0.0)
    /// - `PORT`: TCP port (default: 8080)
    /// - `REQUEST_TIMEOUT`: Request timeout in seconds, must be > 0 (default: 10)
    /// - `CORS_ORIGINS`: Comma-separated allowed origins (default: "*")
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        if host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "HOST".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let port = Self::parse_env_u16("PORT", DEFAULT_PORT)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|val| {
                val.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_else(|_| vec!["*".to_string()]);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            host,
            port,
            request_timeout,
            cors_origins,
            log_level,
        })
    }

    /// Socket address string in `host:port` form.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            request_timeout: 10,
            cors_origins: vec!["*".to_string()],
            log_level: "info".to_string(),
        }
    }
}
