//! Markdown assembly of the classified commits.

use tracing::debug;

use crate::classify::Classification;
use crate::summary::{summarize_or_original, Summarizer};

use super::format::{format_entry, SUMMARY_INSTRUCTION};

/// Render the release notes document.
///
/// Sections come in fixed order (New Features, Bug Fixes, Other Changes)
/// and are skipped when empty. The Bug Fixes and Other Changes headers are
/// preceded by a blank line even when no earlier section was written.
/// Feature and bug-fix entries are summarized one at a time in document
/// order; other changes are rendered verbatim.
pub async fn generate_release_notes<S>(classification: &Classification, summarizer: &S) -> String
where
    S: Summarizer + ?Sized,
{
    let mut notes = String::new();

    for (index, (category, commits)) in classification.sections().into_iter().enumerate() {
        if commits.is_empty() {
            continue;
        }

        if index > 0 {
            notes.push('\n');
        }
        notes.push_str(&format!("## {}\n", category.heading()));

        for commit in commits {
            let text = if category.is_summarized() {
                debug!(hash = %commit.hash, "Summarizing commit");
                summarize_or_original(summarizer, &commit.message, SUMMARY_INSTRUCTION).await
            } else {
                commit.message.clone()
            };

            notes.push_str(&format_entry(&text, &commit.hash));
        }
    }

    notes
}
