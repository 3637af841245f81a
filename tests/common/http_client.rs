//! HTTP client helpers for tests.

use plagiscan::report::PlagiarismReport;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<(u16, Value), TestClientError> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        let status = response.status().as_u16();
        Ok((status, response.json().await?))
    }

    /// Posts raw JSON and returns the status with the decoded body.
    pub async fn check_raw(&self, body: Value) -> Result<(u16, Value), TestClientError> {
        let response = self
            .client
            .post(self.url("/api/plagiarism-check"))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;
        let status = response.status().as_u16();
        Ok((status, response.json().await?))
    }

    pub async fn check(&self, text: &str) -> Result<PlagiarismReport, TestClientError> {
        let (status, body) = self.check_raw(serde_json::json!({ "text": text })).await?;
        if status != 200 {
            return Err(TestClientError::Status { status, body });
        }
        Ok(serde_json::from_value(body)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: Value },
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
