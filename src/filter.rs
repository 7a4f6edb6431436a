//! Drops the candidates the old branch already has.

use crate::index::HistoryIndex;
use crate::record::CommitRecord;

/// Keeps a candidate unless its author has a commit with the very same subject in the index.
/// Order of the candidates is kept, nothing is reordered or duplicated.
///
/// Author and subject are what a cherry-pick leaves intact: the hash and committer change, and
/// the body may get conflict notes appended. A subject edited during the pick will not match and
/// the commit shows up as new. That is accepted.
pub fn filter_candidates(
    candidates: Vec<CommitRecord>,
    index: &HistoryIndex,
) -> Vec<CommitRecord> {
    candidates
        .into_iter()
        .filter(|record| {
            let known = index.contains(record.author_email(), record.subject());
            if known {
                tracing::debug!(
                    hash = record.hash(),
                    subject = record.subject(),
                    "already on old branch"
                );
            }
            !known
        })
        .collect()
}
