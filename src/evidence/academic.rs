//! Academic metadata adapter (Crossref `works` API shape).

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::config::EvidenceConfig;
use super::error::EvidenceError;
use super::{SearchProvider, truncate_chars};

const PROVIDER: &str = "academic_search";

#[derive(Debug, Deserialize)]
struct WorksResponse {
    message: Option<WorksMessage>,
}

#[derive(Debug, Deserialize)]
struct WorksMessage {
    #[serde(default)]
    items: Vec<WorkItem>,
}

#[derive(Debug, Deserialize)]
struct WorkItem {
    #[serde(rename = "URL")]
    url: Option<String>,
}

/// Collects the declared URL of each work item, in response order.
///
/// Items without a URL are skipped. A body without `message.items` yields an
/// empty list; a body that is not JSON of this shape is a decode error.
pub fn parse_work_urls(body: &str, cap: usize) -> Result<Vec<String>, EvidenceError> {
    let response: WorksResponse =
        serde_json::from_str(body).map_err(|e| EvidenceError::Decode {
            provider: PROVIDER,
            reason: e.to_string(),
        })?;

    Ok(response
        .message
        .map(|message| message.items)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| item.url)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .take(cap)
        .collect())
}

/// Queries the academic metadata API for works matching a sentence.
#[derive(Debug, Clone)]
pub struct AcademicSearchProvider {
    client: Client,
    endpoint: Url,
    query_chars: usize,
    rows: usize,
}

impl AcademicSearchProvider {
    pub fn new(client: Client, config: &EvidenceConfig) -> Self {
        Self {
            client,
            endpoint: config.academic_search_url.clone(),
            query_chars: config.academic_query_chars,
            rows: config.academic_rows,
        }
    }
}

impl SearchProvider for AcademicSearchProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn search(&self, query: &str) -> Result<Vec<String>, EvidenceError> {
        let query = truncate_chars(query, self.query_chars);
        let rows = self.rows.to_string();

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("query", query), ("rows", rows.as_str())])
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

        let body = response
            .text()
            .await
            .map_err(|source| EvidenceError::Request {
                provider: PROVIDER,
                source,
            })?;

        let urls = parse_work_urls(&body, self.rows)?;
        debug!(provider = PROVIDER, results = urls.len(), "Fetched work items");
        Ok(urls)
    }
}
