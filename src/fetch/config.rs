use std::time::Duration;

use crate::config::{ConfigError, env_parse_or, env_string_or};
use crate::constants::{DEFAULT_FETCH_TIMEOUT_MS, DEFAULT_MAX_DOCUMENT_CHARS, DEFAULT_USER_AGENT};

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Deadline for one page, covering connect, headers and body.
    pub timeout: Duration,

    /// Cleaned text is truncated to this many characters.
    pub max_document_chars: usize,

    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
            max_document_chars: DEFAULT_MAX_DOCUMENT_CHARS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetcherConfig {
    const ENV_FETCH_TIMEOUT_MS: &'static str = "PLAGISCAN_FETCH_TIMEOUT_MS";
    const ENV_MAX_DOCUMENT_CHARS: &'static str = "PLAGISCAN_MAX_DOCUMENT_CHARS";
    const ENV_USER_AGENT: &'static str = "PLAGISCAN_USER_AGENT";

    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            timeout: Duration::from_millis(env_parse_or(
                Self::ENV_FETCH_TIMEOUT_MS,
                DEFAULT_FETCH_TIMEOUT_MS,
            )),
            max_document_chars: env_parse_or(
                Self::ENV_MAX_DOCUMENT_CHARS,
                defaults.max_document_chars,
            ),
            user_agent: env_string_or(Self::ENV_USER_AGENT, &defaults.user_agent),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_document_chars(mut self, max_chars: usize) -> Self {
        self.max_document_chars = max_chars;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "fetch_timeout",
                reason: "must be > 0".to_string(),
            });
        }
        if self.max_document_chars == 0 {
            return Err(ConfigError::InvalidValue {
                name: "max_document_chars",
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }
}
