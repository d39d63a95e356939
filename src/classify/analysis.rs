//! Partitioning a commit range into release notes categories.

use std::path::Path;

use git2::Repository;
use tracing::{debug, error};

use crate::error::GitError;
use crate::git::{fetch_commits, resolve_range, CommitRecord};

use super::category::{classify_message, CommitCategory};

/// Commits of a range partitioned by category, each list in log order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub features: Vec<CommitRecord>,
    pub bug_fixes: Vec<CommitRecord>,
    pub other_changes: Vec<CommitRecord>,
}

impl Classification {
    /// Classify commits one by one, keeping their relative order.
    pub fn from_commits(commits: impl IntoIterator<Item = CommitRecord>) -> Self {
        let mut classification = Self::default();

        for commit in commits {
            let list = match classify_message(&commit.message) {
                CommitCategory::Feature => &mut classification.features,
                CommitCategory::BugFix => &mut classification.bug_fixes,
                CommitCategory::Other => &mut classification.other_changes,
            };
            list.push(commit);
        }

        classification
    }

    /// Sections in rendering order.
    pub fn sections(&self) -> [(CommitCategory, &[CommitRecord]); 3] {
        [
            (CommitCategory::Feature, self.features.as_slice()),
            (CommitCategory::BugFix, self.bug_fixes.as_slice()),
            (CommitCategory::Other, self.other_changes.as_slice()),
        ]
    }

    pub fn len(&self) -> usize {
        self.features.len() + self.bug_fixes.len() + self.other_changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read the commits of `range` from the repository at `repo_path` and classify them.
pub fn analyze_commits(repo_path: &Path, range: &str) -> Result<Classification, GitError> {
    let repo = Repository::open(repo_path).map_err(|e| GitError::OpenRepository {
        path: repo_path.display().to_string(),
        source: e,
    })?;

    let range = resolve_range(&repo, range)?;
    debug!(from = %range.from_ref, to = %range.to_ref, "Walking commit range");

    let commits = fetch_commits(&repo, range.from, range.to)?;
    debug!(count = commits.len(), "Fetched commits");

    Ok(Classification::from_commits(commits))
}

/// Like [`analyze_commits`], but a failed log query is logged and
/// yields an empty classification.
pub fn analyze_commits_or_empty(repo_path: &Path, range: &str) -> Classification {
    match analyze_commits(repo_path, range) {
        Ok(classification) => classification,
        Err(e) => {
            error!("Error analyzing commits: {}", e);
            Classification::default()
        }
    }
}
