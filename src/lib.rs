//! Finds the commits of a base branch that never made it into an old branch, even when they were
//! cherry-picked under a new hash and committer. A commit counts as already present when the old
//! branch has a commit by the same author email with the same subject line.

pub mod error;
pub mod filter;
pub mod git_utils;
pub mod history;
pub mod index;
pub mod publish;
pub mod record;

pub use error::{FinderError, EXIT_CODE};
pub use git_utils::GitHistory;
pub use history::HistoryStore;
pub use index::HistoryIndex;
pub use record::CommitRecord;

/// Both branches are checked before any history is queried. Then the old branch is indexed and
/// the base-only commits filtered against it. Merge commits are never considered.
pub fn find_new_commits<S: HistoryStore + ?Sized>(
    store: &S,
    base: &str,
    old: &str,
) -> Result<Vec<CommitRecord>, FinderError> {
    for name in [base, old] {
        if !store.branch_exists(name)? {
            return Err(FinderError::MissingBranch {
                name: name.to_owned(),
            });
        }
    }

    let old_hashes = store.non_merge_history(old, None)?;
    let index = HistoryIndex::build(store, &old_hashes)?;
    tracing::info!(
        branch = old,
        commits = old_hashes.len(),
        authors = index.author_count(),
        subjects = index.len(),
        "indexed old branch"
    );
    if index.is_empty() {
        tracing::debug!(branch = old, "nothing indexed, every candidate is new");
    }

    let candidate_hashes = store.non_merge_history(base, Some(old))?;
    let candidates = record::resolve_all(store, &candidate_hashes)?;
    let new_commits = filter::filter_candidates(candidates, &index);
    tracing::info!(
        branch = base,
        candidates = candidate_hashes.len(),
        new = new_commits.len(),
        "filtered base branch"
    );
    Ok(new_commits)
}
