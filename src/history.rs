//! The history queries the finder depends on. [`GitHistory`](crate::git_utils::GitHistory) is
//! the real thing, tests swap in an in-memory store.

use crate::error::FinderError;

/// Read-only view of a repository's branches and commits. Hashes are opaque strings as far as
/// the finder is concerned.
pub trait HistoryStore {
    /// Whether `name` is in the repository's branch list.
    fn branch_exists(&self, name: &str) -> Result<bool, FinderError>;

    /// Non-merge commits reachable from `branch`, most recent first. Commits reachable from
    /// `exclude` are left out.
    fn non_merge_history(
        &self,
        branch: &str,
        exclude: Option<&str>,
    ) -> Result<Vec<String>, FinderError>;

    /// Author email and subject of a commit, one per line. Whatever the store produces is
    /// returned as is; validating the shape is up to the caller.
    fn metadata_lines(&self, hash: &str) -> Result<Vec<String>, FinderError>;

    /// The full log entry of a single commit, ready for display.
    fn render_log(&self, hash: &str) -> Result<String, FinderError>;
}
