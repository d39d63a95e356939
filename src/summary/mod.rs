//! Optional rephrasing of commit messages by a remote summarization service.

pub mod config;
pub mod http;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::SummaryError;

pub use config::{SummarizerConfig, API_KEY_ENV_VAR, API_URL_ENV_VAR};
pub use http::{build_prompt, parse_summary_response, HttpSummarizer};

/// Trait for rewriting a piece of text under an instruction.
///
/// This abstraction allows mocking the summarization service in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Return the rewritten text, or the reason there is none.
    async fn summarize(&self, text: &str, instruction: &str) -> Result<String, SummaryError>;
}

/// Summarize `text`, falling back to `text` itself on any failure.
pub async fn summarize_or_original<S>(summarizer: &S, text: &str, instruction: &str) -> String
where
    S: Summarizer + ?Sized,
{
    match summarizer.summarize(text, instruction).await {
        Ok(summary) => summary,
        Err(SummaryError::NotConfigured) => {
            debug!("Summarization not configured, keeping original message");
            text.to_string()
        }
        Err(e) => {
            warn!("{}. Keeping original message.", e);
            text.to_string()
        }
    }
}
