//! Summarization service configuration.

use std::env;
use std::fmt;

/// Environment variable holding the summarization service address.
pub const API_URL_ENV_VAR: &str = "LLM_API_URL";

/// Environment variable holding the bearer credential for the service.
pub const API_KEY_ENV_VAR: &str = "LLM_API_KEY";

/// Where and how to reach the summarization service.
///
/// Summarization is enabled only when both fields are set.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SummarizerConfig {
    pub service_url: Option<String>,
    pub api_key: Option<String>,
}

impl SummarizerConfig {
    /// Empty strings are treated as unset.
    pub fn new(service_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            service_url: service_url.filter(|v| !v.is_empty()),
            api_key: api_key.filter(|v| !v.is_empty()),
        }
    }

    /// Read `LLM_API_URL` and `LLM_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(env::var(API_URL_ENV_VAR).ok(), env::var(API_KEY_ENV_VAR).ok())
    }

    pub fn is_enabled(&self) -> bool {
        self.service_url.is_some() && self.api_key.is_some()
    }
}

// Keeps the credential out of logs.
impl fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("service_url", &self.service_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
