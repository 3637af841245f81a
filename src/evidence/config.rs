use std::time::Duration;
use url::Url;

use crate::config::{ConfigError, env_parse_or, env_string_or};
use crate::constants::{
    DEFAULT_ACADEMIC_QUERY_CHARS, DEFAULT_ACADEMIC_ROWS, DEFAULT_ACADEMIC_SEARCH_URL,
    DEFAULT_MAX_CANDIDATES, DEFAULT_SEARCH_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    DEFAULT_WEB_MAX_RESULTS, DEFAULT_WEB_QUERY_CHARS, DEFAULT_WEB_SEARCH_EXCLUDED_HOST,
    DEFAULT_WEB_SEARCH_URL,
};

#[derive(Debug, Clone)]
pub struct EvidenceConfig {
    /// HTML search surface queried with `?q=`.
    pub web_search_url: Url,

    /// Result links on this host (or its subdomains) are dropped.
    pub web_excluded_host: String,

    /// Academic metadata endpoint queried with `?query=&rows=`.
    pub academic_search_url: Url,

    pub web_query_chars: usize,

    pub academic_query_chars: usize,

    pub web_max_results: usize,

    pub academic_rows: usize,

    /// Cap on the merged, deduplicated candidate list.
    pub max_candidates: usize,

    /// Per-request deadline for either provider.
    pub timeout: Duration,

    pub user_agent: String,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            web_search_url: static_url(DEFAULT_WEB_SEARCH_URL),
            web_excluded_host: DEFAULT_WEB_SEARCH_EXCLUDED_HOST.to_string(),
            academic_search_url: static_url(DEFAULT_ACADEMIC_SEARCH_URL),
            web_query_chars: DEFAULT_WEB_QUERY_CHARS,
            academic_query_chars: DEFAULT_ACADEMIC_QUERY_CHARS,
            web_max_results: DEFAULT_WEB_MAX_RESULTS,
            academic_rows: DEFAULT_ACADEMIC_ROWS,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            timeout: Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

fn static_url(raw: &str) -> Url {
    Url::parse(raw).expect("static default url parses")
}

impl EvidenceConfig {
    const ENV_WEB_SEARCH_URL: &'static str = "PLAGISCAN_WEB_SEARCH_URL";
    const ENV_WEB_EXCLUDED_HOST: &'static str = "PLAGISCAN_WEB_EXCLUDED_HOST";
    const ENV_ACADEMIC_SEARCH_URL: &'static str = "PLAGISCAN_ACADEMIC_SEARCH_URL";
    const ENV_WEB_QUERY_CHARS: &'static str = "PLAGISCAN_WEB_QUERY_CHARS";
    const ENV_ACADEMIC_QUERY_CHARS: &'static str = "PLAGISCAN_ACADEMIC_QUERY_CHARS";
    const ENV_WEB_MAX_RESULTS: &'static str = "PLAGISCAN_WEB_MAX_RESULTS";
    const ENV_ACADEMIC_ROWS: &'static str = "PLAGISCAN_ACADEMIC_ROWS";
    const ENV_MAX_CANDIDATES: &'static str = "PLAGISCAN_MAX_CANDIDATES";
    const ENV_SEARCH_TIMEOUT_SECS: &'static str = "PLAGISCAN_SEARCH_TIMEOUT_SECS";
    const ENV_USER_AGENT: &'static str = "PLAGISCAN_USER_AGENT";

    /// Loads provider settings from `PLAGISCAN_*` variables.
    ///
    /// Endpoint URLs must parse; numeric settings fall back to defaults when
    /// unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            web_search_url: url_from_env(Self::ENV_WEB_SEARCH_URL, defaults.web_search_url)?,
            web_excluded_host: env_string_or(
                Self::ENV_WEB_EXCLUDED_HOST,
                &defaults.web_excluded_host,
            ),
            academic_search_url: url_from_env(
                Self::ENV_ACADEMIC_SEARCH_URL,
                defaults.academic_search_url,
            )?,
            web_query_chars: env_parse_or(Self::ENV_WEB_QUERY_CHARS, defaults.web_query_chars),
            academic_query_chars: env_parse_or(
                Self::ENV_ACADEMIC_QUERY_CHARS,
                defaults.academic_query_chars,
            ),
            web_max_results: env_parse_or(Self::ENV_WEB_MAX_RESULTS, defaults.web_max_results),
            academic_rows: env_parse_or(Self::ENV_ACADEMIC_ROWS, defaults.academic_rows),
            max_candidates: env_parse_or(Self::ENV_MAX_CANDIDATES, defaults.max_candidates),
            timeout: Duration::from_secs(env_parse_or(
                Self::ENV_SEARCH_TIMEOUT_SECS,
                defaults.timeout.as_secs(),
            )),
            user_agent: env_string_or(Self::ENV_USER_AGENT, &defaults.user_agent),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("web_query_chars", self.web_query_chars),
            ("academic_query_chars", self.academic_query_chars),
            ("web_max_results", self.web_max_results),
            ("academic_rows", self.academic_rows),
            ("max_candidates", self.max_candidates),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    name,
                    reason: "must be > 0".to_string(),
                });
            }
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "search_timeout",
                reason: "must be > 0".to_string(),
            });
        }

        Ok(())
    }
}

fn url_from_env(var_name: &'static str, default: Url) -> Result<Url, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) if !value.trim().is_empty() => {
            Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl {
                name: var_name,
                value,
                source,
            })
        }
        _ => Ok(default),
    }
}
