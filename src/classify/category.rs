//! Message-pattern commit categorization.

use std::sync::LazyLock;

use regex_lite::Regex;

// The scope parentheses are literal: `feat(api):` matches, `feature:` does not.
static FEAT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^feat(\([^)]*\))?:").expect("feat prefix pattern is valid"));

static FIX_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^fix(\([^)]*\))?:").expect("fix prefix pattern is valid"));

/// Release notes category of a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitCategory {
    Feature,
    BugFix,
    Other,
}

impl CommitCategory {
    /// Section heading used in the rendered notes.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Feature => "New Features",
            Self::BugFix => "Bug Fixes",
            Self::Other => "Other Changes",
        }
    }

    /// Whether entries in this category go through the summarizer.
    pub fn is_summarized(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Categorize a commit message. First matching rule wins:
///
/// 1. `feat:` / `feat(scope):` prefix (case-sensitive) is a feature
/// 2. `fix:` / `fix(scope):` prefix (case-sensitive) is a bug fix
/// 3. "bug" or "fix" anywhere, any case, is a bug fix
/// 4. everything else is another change
///
/// This is a loose heuristic, not a conventional-commit parser.
pub fn classify_message(message: &str) -> CommitCategory {
    let message = message.trim();

    if FEAT_PREFIX.is_match(message) {
        return CommitCategory::Feature;
    }

    if FIX_PREFIX.is_match(message) {
        return CommitCategory::BugFix;
    }

    let lower = message.to_lowercase();
    if lower.contains("bug") || lower.contains("fix") {
        return CommitCategory::BugFix;
    }

    CommitCategory::Other
}
