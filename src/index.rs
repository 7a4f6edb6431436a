//! Index of what the old branch already contains, keyed on who wrote it.

use crate::error::FinderError;
use crate::history::HistoryStore;
use crate::record::CommitRecord;
use std::collections::{HashMap, HashSet};

/// Author email to the set of subjects that author has on the old branch. Every author present
/// has at least one subject. Built once, only read afterwards.
#[derive(Debug, Default)]
pub struct HistoryIndex {
    subjects_by_author: HashMap<String, HashSet<String>>,
}

impl HistoryIndex {
    /// Resolves every hash and indexes it. A single malformed commit aborts the whole build.
    pub fn build<S: HistoryStore + ?Sized>(
        store: &S,
        hashes: &[String],
    ) -> Result<Self, FinderError> {
        let mut subjects_by_author: HashMap<String, HashSet<String>> = HashMap::new();
        for hash in hashes {
            let record = CommitRecord::resolve(store, hash)?;
            tracing::trace!(hash, author = record.author_email(), "indexing");
            subjects_by_author
                .entry(record.author_email().to_owned())
                .or_default()
                .insert(record.subject().to_owned());
        }
        Ok(Self { subjects_by_author })
    }

    /// Exact match on both author and subject. No case folding, no trimming.
    pub fn contains(&self, author_email: &str, subject: &str) -> bool {
        self.subjects_by_author
            .get(author_email)
            .map_or(false, |subjects| subjects.contains(subject))
    }

    /// Number of distinct authors
    pub fn author_count(&self) -> usize {
        self.subjects_by_author.len()
    }

    /// Number of distinct (author, subject) pairs
    pub fn len(&self) -> usize {
        self.subjects_by_author.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects_by_author.is_empty()
    }
}
