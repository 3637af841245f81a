//! HTML web search adapter.
//!
//! The search surface renders result links as redirects of the form
//! `.../l/?uddg=<percent-encoded target>&rut=...`. Extraction scans the raw
//! body for that parameter rather than parsing markup, so a layout change on
//! the surface only touches [`extract_redirect_targets`].

use percent_encoding::percent_decode_str;
use regex::Regex;
use reqwest::Client;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::debug;
use url::Url;

use super::config::EvidenceConfig;
use super::error::EvidenceError;
use super::{SearchProvider, truncate_chars};

const PROVIDER: &str = "web_search";

fn redirect_target_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"uddg=([^"&]+)"#).expect("redirect regex must compile"))
}

/// Scrapes result URLs out of a search results page.
///
/// Each `uddg=` value is percent-decoded. A value is dropped when its
/// escapes are malformed or do not decode to UTF-8, when it is not an
/// absolute `http`/`https` URL, or when it points back at `excluded_host`. Duplicates are removed (first occurrence wins) before applying
/// `cap`.
pub fn extract_redirect_targets(html: &str, excluded_host: &str, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();

    redirect_target_re()
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .filter_map(|encoded| decode_component(encoded.as_str()))
        .filter(|target| is_external_http(target, excluded_host))
        .filter(|target| seen.insert(target.clone()))
        .take(cap)
        .collect()
}

/// Percent-decodes one component. `+` stays literal.
fn decode_component(encoded: &str) -> Option<String> {
    if !has_well_formed_escapes(encoded) {
        return None;
    }
    percent_decode_str(encoded)
        .decode_utf8()
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn has_well_formed_escapes(encoded: &str) -> bool {
    let bytes = encoded.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || (bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    })
}

fn is_external_http(target: &str, excluded_host: &str) -> bool {
    let Ok(parsed) = Url::parse(target) else {
        return false;
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    match parsed.host_str() {
        Some(host) => {
            let host = host.to_ascii_lowercase();
            let excluded = excluded_host.to_ascii_lowercase();
            excluded.is_empty() || !(host == excluded || host.ends_with(&format!(".{}", excluded)))
        }
        None => false,
    }
}

/// Queries the HTML search surface and scrapes result links.
#[derive(Debug, Clone)]
pub struct WebSearchProvider {
    client: Client,
    endpoint: Url,
    excluded_host: String,
    query_chars: usize,
    max_results: usize,
}

impl WebSearchProvider {
    pub fn new(client: Client, config: &EvidenceConfig) -> Self {
        Self {
            client,
            endpoint: config.web_search_url.clone(),
            excluded_host: config.web_excluded_host.clone(),
            query_chars: config.web_query_chars,
            max_results: config.web_max_results,
        }
    }
}

impl SearchProvider for WebSearchProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn search(&self, query: &str) -> Result<Vec<String>, EvidenceError> {
        let query = truncate_chars(query, self.query_chars);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|source| EvidenceError::Request {
                provider: PROVIDER,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EvidenceError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|source| EvidenceError::Request {
                provider: PROVIDER,
                source,
            })?;

        let urls = extract_redirect_targets(&html, &self.excluded_host, self.max_results);
        debug!(
            provider = PROVIDER,
            body_len = html.len(),
            results = urls.len(),
            "Scraped search results"
        );
        Ok(urls)
    }
}
