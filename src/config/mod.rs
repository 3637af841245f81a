//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `PLAGISCAN_*` environment
//! variables. This module covers the HTTP server; the check pipeline, the
//! evidence providers and the page fetcher each own a `*Config` with the same
//! `from_env` shape.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;

use crate::constants::{DEFAULT_MIN_TEXT_CHARS, DEFAULT_PORT};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PLAGISCAN_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `5005`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Origins allowed by CORS. Empty means any origin.
    pub cors_origins: Vec<String>,

    /// Minimum trimmed length of the text accepted by the check endpoint.
    pub min_text_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            cors_origins: Vec::new(),
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "PLAGISCAN_PORT";
    const ENV_BIND_ADDR: &'static str = "PLAGISCAN_BIND_ADDR";
    const ENV_CORS_ORIGINS: &'static str = "PLAGISCAN_CORS_ORIGINS";
    const ENV_MIN_TEXT_CHARS: &'static str = "PLAGISCAN_MIN_TEXT_CHARS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let cors_origins = Self::parse_list_from_env(Self::ENV_CORS_ORIGINS);
        let min_text_chars = env_parse_or(Self::ENV_MIN_TEXT_CHARS, defaults.min_text_chars);

        Ok(Self {
            port,
            bind_addr,
            cors_origins,
            min_text_chars,
        })
    }

    /// Rejects settings `from_env` cannot catch on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort {
                value: self.port.to_string(),
            });
        }
        if let Some(origin) = self.cors_origins.iter().find(|o| !o.starts_with("http")) {
            return Err(ConfigError::InvalidValue {
                name: "cors_origins",
                reason: format!("origin must include a scheme: {origin}"),
            });
        }
        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_list_from_env(var_name: &str) -> Vec<String> {
        env::var(var_name)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Reads `var_name` and parses it, falling back to `default` when the
/// variable is unset or unparsable.
pub fn env_parse_or<T: std::str::FromStr>(var_name: &str, default: T) -> T {
    env::var(var_name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Reads `var_name` as a trimmed, non-empty string.
pub fn env_string_or(var_name: &str, default: &str) -> String {
    env::var(var_name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
