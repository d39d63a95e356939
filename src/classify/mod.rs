//! Commit classification into features, bug fixes and other changes.

pub mod analysis;
pub mod category;

pub use analysis::{analyze_commits, analyze_commits_or_empty, Classification};
pub use category::{classify_message, CommitCategory};
