//! HTTP client for the summarization service.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::SummaryError;

use super::config::SummarizerConfig;
use super::Summarizer;

/// Request body sent to the service.
#[derive(Debug, Serialize)]
struct SummaryRequest {
    prompt: String,
}

/// Response body expected from the service.
#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    summary: Option<String>,
}

/// Build the prompt: instruction, blank line, text.
pub fn build_prompt(instruction: &str, text: &str) -> String {
    format!("{}\n\n{}", instruction, text)
}

/// Pull the `summary` field out of a response body.
///
/// A missing, null or empty summary is reported as [`SummaryError::MissingSummary`].
pub fn parse_summary_response(body: &str) -> Result<String, SummaryError> {
    let response: SummaryResponse =
        serde_json::from_str(body).map_err(|e| SummaryError::InvalidResponse(e.to_string()))?;

    match response.summary {
        Some(summary) if !summary.is_empty() => Ok(summary),
        _ => Err(SummaryError::MissingSummary),
    }
}

/// Summarizer backed by a single `POST` per call. No retries, no timeout
/// beyond the client's own defaults.
pub struct HttpSummarizer {
    config: SummarizerConfig,
    client: Client,
}

impl HttpSummarizer {
    pub fn new(config: SummarizerConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Use a pre-configured client (proxies, custom TLS, test servers).
    pub fn with_client(config: SummarizerConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, text: &str, instruction: &str) -> Result<String, SummaryError> {
        let (Some(url), Some(api_key)) = (
            self.config.service_url.as_deref(),
            self.config.api_key.as_deref(),
        ) else {
            return Err(SummaryError::NotConfigured);
        };

        let request = SummaryRequest {
            prompt: build_prompt(instruction, text),
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(SummaryError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummaryError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(SummaryError::Request)?;
        parse_summary_response(&body)
    }
}
