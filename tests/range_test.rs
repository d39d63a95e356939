//! Integration tests for commit range resolution.
//!
//! Tests the `resolve_range` function from `src/git/range.rs` using
//! temporary git repositories.

mod common;

use common::TestRepo;
use relnotes::error::GitError;
use relnotes::git::range::{branch_range, resolve_range};

#[test]
fn test_resolve_range_with_commit_ids() {
    let test_repo = TestRepo::new();

    let commit1 = test_repo.commit("feat: first commit");
    let _commit2 = test_repo.commit("feat: second commit");
    let commit3 = test_repo.commit("feat: third commit");

    let spec = format!("{}..{}", commit1, commit3);
    let range = resolve_range(&test_repo.repo, &spec).expect("Failed to resolve range");

    assert_eq!(range.from, commit1);
    assert_eq!(range.to, commit3);
    assert_eq!(range.from_ref, commit1.to_string());
    assert_eq!(range.to_ref, commit3.to_string());
}

#[test]
fn test_resolve_range_with_branches() {
    let test_repo = TestRepo::new();

    let base = test_repo.commit("feat: base");
    test_repo.branch("main-line", base);
    let tip = test_repo.commit("feat: on feature");
    test_repo.branch("feature", tip);

    let range = resolve_range(&test_repo.repo, &branch_range("feature", "main-line"))
        .expect("Failed to resolve range");

    assert_eq!(range.from, base);
    assert_eq!(range.to, tip);
    assert_eq!(range.from_ref, "main-line");
    assert_eq!(range.to_ref, "feature");
}

#[test]
fn test_resolve_range_with_tag_and_default_head() {
    let test_repo = TestRepo::new();

    let commit1 = test_repo.commit("feat: first commit");
    test_repo.tag_lightweight("v1.0.0", commit1);
    let commit2 = test_repo.commit("feat: second commit");

    let range = resolve_range(&test_repo.repo, "v1.0.0..").expect("Failed to resolve range");

    assert_eq!(range.from, commit1);
    assert_eq!(range.to, commit2);
    assert_eq!(range.to_ref, "HEAD");
}

#[test]
fn test_resolve_range_with_short_hash() {
    let test_repo = TestRepo::new();

    let commit1 = test_repo.commit("feat: first commit");
    let commit2 = test_repo.commit("feat: second commit");

    let short = &commit1.to_string()[..7];
    let range = resolve_range(&test_repo.repo, &format!("{}..HEAD", short))
        .expect("Failed to resolve range");

    assert_eq!(range.from, commit1);
    assert_eq!(range.to, commit2);
}

#[test]
fn test_resolve_range_unknown_branch() {
    let test_repo = TestRepo::new();
    test_repo.commit("feat: first commit");

    let result = resolve_range(&test_repo.repo, "does-not-exist..HEAD");

    assert!(matches!(
        result,
        Err(GitError::ReferenceNotFound(name, _)) if name == "does-not-exist"
    ));
}

#[test]
fn test_resolve_range_malformed() {
    let test_repo = TestRepo::new();
    test_repo.commit("feat: first commit");

    let result = resolve_range(&test_repo.repo, "HEAD");

    assert!(matches!(result, Err(GitError::InvalidRange(_))));
}
