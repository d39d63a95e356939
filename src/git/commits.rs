//! Commit fetching.

use git2::{Commit, Oid, Repository};

use crate::error::GitError;

/// A commit as it appears in the release notes: its full id and summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub hash: String,
    pub message: String,
}

impl CommitRecord {
    pub fn new(hash: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
        }
    }

    /// Create a CommitRecord from a git2 Commit.
    ///
    /// Uses the commit summary (first paragraph, the `%s` of `git log`),
    /// trimmed. Non-UTF-8 messages are decoded lossily.
    pub fn from_git2_commit(commit: &Commit) -> Self {
        let summary = commit
            .summary_bytes()
            .map(String::from_utf8_lossy)
            .unwrap_or_default();

        Self {
            hash: commit.id().to_string(),
            message: summary.trim().to_string(),
        }
    }
}

/// Fetch commits reachable from `to_oid` but not from `from_oid`.
///
/// Commits come back in revwalk order, newest first.
pub fn fetch_commits(
    repo: &Repository,
    from_oid: Oid,
    to_oid: Oid,
) -> Result<Vec<CommitRecord>, GitError> {
    let mut revwalk = repo.revwalk().map_err(GitError::RevwalkError)?;

    revwalk.push(to_oid).map_err(GitError::RevwalkError)?;
    revwalk.hide(from_oid).map_err(GitError::RevwalkError)?;

    let mut commits = Vec::new();

    for oid_result in revwalk {
        let oid = oid_result.map_err(GitError::RevwalkError)?;
        let commit = repo.find_commit(oid).map_err(GitError::ParseCommit)?;
        commits.push(CommitRecord::from_git2_commit(&commit));
    }

    Ok(commits)
}
