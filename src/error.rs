//! Error types for relnotes modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository at '{path}': {source}")]
    OpenRepository {
        path: String,
        #[source]
        source: git2::Error,
    },

    #[error("Invalid commit range '{0}': expected '<target>..<source>'")]
    InvalidRange(String),

    #[error("Failed to find reference '{0}': {1}")]
    ReferenceNotFound(String, #[source] git2::Error),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),
}

/// Errors from the summarization service.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Summarization is not configured (set LLM_API_URL and LLM_API_KEY)")]
    NotConfigured,

    #[error("Summarization request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Summarization service returned HTTP {status}")]
    Status { status: u16 },

    #[error("Summarization service returned an unreadable body: {0}")]
    InvalidResponse(String),

    #[error("Summarization response has no summary")]
    MissingSummary,
}

/// Errors from writing the release notes document.
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Failed to write release notes to '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
