//! Commit range resolution.

use git2::{Oid, Repository};

use crate::error::GitError;

/// Resolved commit range with start and end OIDs.
#[derive(Debug, Clone)]
pub struct CommitRange {
    pub from: Oid,
    pub to: Oid,
    pub from_ref: String,
    pub to_ref: String,
}

/// Build the range expression for "commits on `source` not yet on `target`".
pub fn branch_range(source: &str, target: &str) -> String {
    format!("{}..{}", target, source)
}

/// Split a `<from>..<to>` expression into its two revisions.
///
/// An empty side means `HEAD`, as in `git log main..`.
/// Symmetric differences (`a...b`) are rejected.
pub fn parse_range(spec: &str) -> Result<(&str, &str), GitError> {
    if spec.contains("...") {
        return Err(GitError::InvalidRange(spec.to_string()));
    }

    let (from, to) = spec
        .split_once("..")
        .ok_or_else(|| GitError::InvalidRange(spec.to_string()))?;

    let from = if from.is_empty() { "HEAD" } else { from };
    let to = if to.is_empty() { "HEAD" } else { to };

    Ok((from, to))
}

/// Resolve a `<from>..<to>` expression against a repository.
pub fn resolve_range(repo: &Repository, spec: &str) -> Result<CommitRange, GitError> {
    let (from_ref, to_ref) = parse_range(spec)?;

    let from = resolve_reference(repo, from_ref)?;
    let to = resolve_reference(repo, to_ref)?;

    Ok(CommitRange {
        from,
        to,
        from_ref: from_ref.to_string(),
        to_ref: to_ref.to_string(),
    })
}

/// Resolve a reference (branch, tag, commit hash) to a commit OID.
fn resolve_reference(repo: &Repository, reference: &str) -> Result<Oid, GitError> {
    // Full hex ids first
    if let Ok(oid) = Oid::from_str(reference) {
        if repo.find_commit(oid).is_ok() {
            return Ok(oid);
        }
    }

    let obj = repo
        .revparse_single(reference)
        .map_err(|e| GitError::ReferenceNotFound(reference.to_string(), e))?;

    Ok(obj.peel_to_commit().map_err(GitError::ParseCommit)?.id())
}
