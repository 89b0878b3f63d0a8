//! Configuration management for the EventPro contact service.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is loaded through `dotenvy`, which never writes to stdout (the MCP
//! transport owns stdout).

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Message stored under the `submit` key when delivery fails.
pub const DEFAULT_SUBMIT_ERROR_MESSAGE: &str = "Failed to send message. Please try again later.";

/// Configuration for the contact service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint that receives validated submissions (None disables delivery)
    pub submit_url: Option<String>,

    /// Bearer token sent with each submission
    pub submit_api_key: Option<String>,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// User-facing message recorded when delivery fails
    pub submit_error_message: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_SUBMIT_URL`: Endpoint receiving validated submissions
    /// - `CONTACT_SUBMIT_API_KEY`: Bearer token for the endpoint
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `SUBMIT_ERROR_MESSAGE`: Text shown when delivery fails
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        Self::load_dotenv()?;

        let submit_url = Self::optional_var("CONTACT_SUBMIT_URL");
        if let Some(url) = &submit_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_SUBMIT_URL".to_string(),
                    reason: "Must start with http:// or https://".to_string(),
                });
            }
        }

        let submit_api_key = match env::var("CONTACT_SUBMIT_API_KEY") {
            Ok(key) if key.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_SUBMIT_API_KEY".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(key) => Some(key),
            Err(_) => None,
        };

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let submit_error_message = env::var("SUBMIT_ERROR_MESSAGE")
            .unwrap_or_else(|_| DEFAULT_SUBMIT_ERROR_MESSAGE.to_string());
        if submit_error_message.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "SUBMIT_ERROR_MESSAGE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            submit_url,
            submit_api_key,
            request_timeout,
            submit_error_message,
            log_level,
        })
    }

    /// Whether a submission endpoint is available.
    pub fn submission_enabled(&self) -> bool {
        self.submit_url.is_some()
    }

    fn load_dotenv() -> ConfigResult<()> {
        match dotenvy::dotenv() {
            Ok(_) => Ok(()),
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::DotenvError(e.to_string())),
        }
    }

    /// Read a variable, treating unset and blank values alike.
    fn optional_var(var_name: &str) -> Option<String> {
        env::var(var_name).ok().filter(|v| !v.trim().is_empty())
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
            submit_url: None,
            submit_api_key: None,
            request_timeout: 10,
            submit_error_message: DEFAULT_SUBMIT_ERROR_MESSAGE.to_string(),
            log_level: "error".to_string(),
        }
    }
}
