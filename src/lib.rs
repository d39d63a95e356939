//! relnotes - A CLI tool that generates release notes from the commits between two branches.
//!
//! # Overview
//!
//! relnotes walks the commits on a source branch that are not on a target
//! branch, sorts them into features, bug fixes and other changes by message
//! pattern, optionally has a remote summarization service rephrase the
//! feature and fix messages, and renders a Markdown document.

pub mod classify;
pub mod error;
pub mod git;
pub mod notes;
pub mod summary;

// Re-export commonly used types
pub use classify::{Classification, CommitCategory};
pub use error::{GitError, NotesError, SummaryError};
pub use git::CommitRecord;
pub use summary::{HttpSummarizer, Summarizer, SummarizerConfig};
