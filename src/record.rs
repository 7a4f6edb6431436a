//! Resolving a commit hash into the bits the finder compares on.

use crate::error::FinderError;
use crate::history::HistoryStore;

/// The author email and subject of a commit, together with its hash. Fields are only readable;
/// a record never changes after it has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    hash: String,
    author_email: String,
    subject: String,
}

impl CommitRecord {
    /// Asks the store for the metadata of `hash`. Anything other than exactly two non-empty lines
    /// (email, then subject) is treated as corrupt data and stops the run. Skipping such a commit
    /// could hide a real match.
    pub fn resolve<S: HistoryStore + ?Sized>(
        store: &S,
        hash: &str,
    ) -> Result<Self, FinderError> {
        let lines = store.metadata_lines(hash)?;
        match lines.as_slice() {
            [email, subject] if !email.is_empty() && !subject.is_empty() => Ok(Self {
                hash: hash.to_owned(),
                author_email: email.clone(),
                subject: subject.clone(),
            }),
            _ => Err(FinderError::MalformedRecord {
                hash: hash.to_owned(),
                lines: lines.len(),
            }),
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn author_email(&self) -> &str {
        &self.author_email
    }

    /// First line of the commit message
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

/// Resolves every hash, keeping the order. Fails on the first malformed commit.
pub fn resolve_all<S: HistoryStore + ?Sized>(
    store: &S,
    hashes: &[String],
) -> Result<Vec<CommitRecord>, FinderError> {
    hashes
        .iter()
        .map(|hash| CommitRecord::resolve(store, hash))
        .collect()
}
