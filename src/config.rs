//! Configuration management for the Addressbook MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honored without printing to stdout,
//! which MCP uses for communication.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default Elasticsearch port.
pub const DEFAULT_PORT: u16 = 9200;

/// Default name of the index holding contact documents.
pub const DEFAULT_INDEX: &str = "addressbook";

/// Configuration for the Addressbook MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Elasticsearch host including scheme, e.g. `http://localhost`
    pub elasticsearch_host: String,

    /// Elasticsearch HTTP port (default: 9200)
    pub elasticsearch_port: u16,

    /// Index that stores contact documents (default: "addressbook")
    pub index_name: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Wait for a refresh after each write so searches observe it (default: true)
    pub refresh_on_write: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ELASTICSEARCH_HOST`: Store host with scheme
    ///
    /// Optional environment variables:
    /// - `ELASTICSEARCH_PORT`: Store port (default: 9200)
    /// - `ADDRESSBOOK_INDEX`: Index name (default: "addressbook")
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `REFRESH_ON_WRITE`: `true`/`false` (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // We use dotenvy::dotenv() which doesn't print to stdout
        let _ = dotenvy::dotenv();

        let elasticsearch_host = env::var("ELASTICSEARCH_HOST")
            .map_err(|_| ConfigError::MissingVar("ELASTICSEARCH_HOST".to_string()))?;

        if !elasticsearch_host.starts_with("http://") && !elasticsearch_host.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                var: "ELASTICSEARCH_HOST".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let elasticsearch_port = Self::parse_env_u16("ELASTICSEARCH_PORT", DEFAULT_PORT)?;
        let index_name = env::var("ADDRESSBOOK_INDEX").unwrap_or_else(|_| DEFAULT_INDEX.to_string());
        Self::validate_index_name(&index_name)?;

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let refresh_on_write = Self::parse_env_bool("REFRESH_ON_WRITE", true)?;

        Ok(Config {
            elasticsearch_host,
            elasticsearch_port,
            index_name,
            request_timeout,
            refresh_on_write,
        })
    }

    /// Base URL of the store, `<host>:<port>`.
    pub fn store_url(&self) -> String {
        format!(
            "{}:{}",
            self.elasticsearch_host.trim_end_matches('/'),
            self.elasticsearch_port
        )
    }

    /// Elasticsearch rejects empty and uppercase index names.
    fn validate_index_name(name: &str) -> ConfigResult<()> {
        if name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESSBOOK_INDEX".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }
        if name.chars().any(|c| c.is_uppercase()) {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESSBOOK_INDEX".to_string(),
                reason: format!("Must be lowercase, got: {}", name),
            });
        }
        Ok(())
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
                reason: format!("Must be a port number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            elasticsearch_host: "http://localhost".to_string(),
            elasticsearch_port: DEFAULT_PORT,
            index_name: DEFAULT_INDEX.to_string(),
            request_timeout: 10,
            refresh_on_write: true,
        }
    }
}
