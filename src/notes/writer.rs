//! Persisting the release notes document.

use std::path::Path;

use crate::classify::Classification;
use crate::error::NotesError;

/// File the notes are written to when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "release_notes.md";

/// Write the document to `path`, replacing any existing file.
pub fn write_release_notes(path: &Path, content: &str) -> Result<(), NotesError> {
    std::fs::write(path, content).map_err(|e| NotesError::WriteFailed {
        path: path.display().to_string(),
        source: e,
    })
}

/// Generate a one-line summary of what went into the notes.
pub fn generate_summary(classification: &Classification, path: &Path) -> String {
    let total = classification.len();

    if total == 0 {
        return format!("No commits found; wrote empty {}", path.display());
    }

    let details: Vec<String> = classification
        .sections()
        .iter()
        .filter(|(_, commits)| !commits.is_empty())
        .map(|(category, commits)| format!("{}: {}", category.heading(), commits.len()))
        .collect();

    let entry_word = if total == 1 { "entry" } else { "entries" };

    format!(
        "Wrote {} {} ({}) to {}",
        total,
        entry_word,
        details.join(", "),
        path.display()
    )
}
