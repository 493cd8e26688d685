use crate::models::{ProviderRequest, ProviderResult};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the screening provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    #[error("API returned status {0}")]
    ApiError(u16),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Screening provider API client
///
/// Every call is bounded by the configured timeout, covering connect, send
/// and reading the response body. Calls are never retried.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    base_url: String,
    timeout_ms: u64,
    client: Client,
}

impl ProviderClient {
    /// Create a new provider client
    pub fn new(base_url: String, timeout_ms: u64) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;

        Ok(Self {
            base_url,
            timeout_ms,
            client,
        })
    }

    /// Full URL of the screening endpoint
    pub fn screen_url(&self) -> String {
        format!("{}/screen", self.base_url.trim_end_matches('/'))
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Submit a screening request and decode the provider's result
    pub async fn screen(&self, request: &ProviderRequest) -> Result<ProviderResult, ProviderError> {
        let url = self.screen_url();

        tracing::debug!("Submitting screening request to {}: {:?}", url, request);

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Screening provider returned {}: {}", status, body);
            return Err(ProviderError::ApiError(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;

        serde_json::from_slice(&body)
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse screening result: {}", e)))
    }

    fn classify(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout(self.timeout_ms)
        } else {
            ProviderError::RequestError(err)
        }
    }
}
