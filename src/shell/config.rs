// Runtime settings read once at startup.
//
// Boundaries
// - Only the binary reads the environment. Everything else gets the settings through AppState.

use std::net::SocketAddr;
use thiserror::Error;

pub const BIND_ADDR: &str = "PEZZA_BIND_ADDR";
pub const INCLUDE_CORRELATION_ID: &str = "PEZZA_INCLUDE_CORRELATION_ID";
pub const INCLUDE_API_DOC: &str = "PEZZA_INCLUDE_API_DOC";
pub const EXPOSE_ERROR_DETAILS: &str = "PEZZA_EXPOSE_ERROR_DETAILS";
pub const STRICT_WRITES: &str = "PEZZA_STRICT_WRITES";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a boolean, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },

    #[error("{key} must be a socket address, got {value:?}")]
    InvalidAddress { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Echo or generate a `correlation-id` header on every response.
    pub include_correlation_id: bool,
    /// Serve the route document at `/api-doc`.
    pub include_api_doc: bool,
    /// Put the failure text in 500 bodies. Off outside development.
    pub expose_error_details: bool,
    /// Treat a save that touched no rows as a failure.
    pub strict_writes: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            include_correlation_id: true,
            include_api_doc: true,
            expose_error_details: false,
            strict_writes: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let flag = |key: &'static str, default: bool| match lookup(key) {
            Some(value) => parse_flag(key, &value),
            None => Ok(default),
        };

        let bind_addr = match lookup(BIND_ADDR) {
            Some(value) => value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidAddress {
                    key: BIND_ADDR,
                    value,
                })?,
            None => defaults.bind_addr,
        };

        Ok(Self {
            bind_addr,
            include_correlation_id: flag(INCLUDE_CORRELATION_ID, defaults.include_correlation_id)?,
            include_api_doc: flag(INCLUDE_API_DOC, defaults.include_api_doc)?,
            expose_error_details: flag(EXPOSE_ERROR_DETAILS, defaults.expose_error_details)?,
            strict_writes: flag(STRICT_WRITES, defaults.strict_writes)?,
        })
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}
