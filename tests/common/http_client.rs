//! HTTP client helpers for tests.

use grader::gateway::{GradeRequest, GradeResponse, HealthResponse};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
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

    pub async fn grade(&self, request: &GradeRequest) -> Result<GradeResponse, TestClientError> {
        self.grade_raw(serde_json::to_value(request).expect("request serializes"))
            .await
    }

    pub async fn grade_raw(
        &self,
        body: serde_json::Value,
    ) -> Result<GradeResponse, TestClientError> {
        let resp = self.client.post(self.url("/grade")).json(&body).send().await?;

        match resp.status().as_u16() {
            200 => Ok(resp.json().await?),
            422 => Err(TestClientError::Unprocessable(resp.text().await?)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/health")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0} - Body: {1}")]
    UnexpectedStatus(u16, String),

    #[error("Unprocessable request: {0}")]
    Unprocessable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_url_building() {
        let client = TestClient::new("http://localhost:8000");
        assert_eq!(client.url("/health"), "http://localhost:8000/health");
        assert_eq!(client.url("grade"), "http://localhost:8000/grade");
    }
}
