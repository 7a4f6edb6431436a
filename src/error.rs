//! Everything that can stop a run. None of these are recovered from: the binary prints the
//! message and exits with [`EXIT_CODE`].

use thiserror::Error;

/// Exit code for every failure, usage errors included. Not a standard convention, just the code
/// this tool settled on to signal a configuration or environment problem.
pub const EXIT_CODE: i32 = 127;

#[derive(Debug, Error)]
pub enum FinderError {
    /// One of the input branches is not in the repository's branch list
    #[error("Branch {name} does not exist")]
    MissingBranch { name: String },

    /// The metadata query for a commit did not give exactly an author email and a subject
    #[error("Commit {hash} gave {lines} line(s) of metadata, expected author email and subject")]
    MalformedRecord { hash: String, lines: usize },

    #[error("Repository not found: {path}")]
    RepositoryNotFound { path: String },

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl FinderError {
    pub fn exit_code(&self) -> i32 {
        EXIT_CODE
    }
}
