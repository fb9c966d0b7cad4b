//! Configuration management for the contact keeper.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is honored when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact keeper.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document store base URL
    pub store_url: String,

    /// Store API key for authentication
    pub store_api_key: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTACTS_STORE_URL`: Base URL of the document store
    /// - `CONTACTS_STORE_API_KEY`: API key for authentication
    ///
    /// Optional environment variables:
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, without failing when it is absent
        let _ = dotenvy::dotenv();

        let store_url = env::var("CONTACTS_STORE_URL")
            .map_err(|_| ConfigError::MissingVar("CONTACTS_STORE_URL".to_string()))?;

        let store_api_key = env::var("CONTACTS_STORE_API_KEY")
            .map_err(|_| ConfigError::MissingVar("CONTACTS_STORE_API_KEY".to_string()))?;

        // Validate store URL format
        if !store_url.starts_with("http://") && !store_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_STORE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        // Validate API key is not empty
        if store_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_STORE_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            store_url,
            store_api_key,
            request_timeout,
            log_level,
        })
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
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_url: String::new(),
            store_api_key: String::new(),
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
