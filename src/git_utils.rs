//! [`HistoryStore`] on top of a real repository, through git2.

use crate::error::FinderError;
use crate::history::HistoryStore;
use chrono::{DateTime, FixedOffset};
use std::fmt::Write;
use std::path::Path;

/// Wraps an opened repository. Only local branches count as branches unless remotes were asked
/// for, mirroring what `git branch --list` shows.
pub struct GitHistory {
    repo: git2::Repository,
    include_remotes: bool,
}

impl GitHistory {
    /// Finds the repository containing `path`, walking up the directory tree like git does.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self, FinderError> {
        let path = path.as_ref();
        let repo =
            git2::Repository::discover(path).map_err(|_| FinderError::RepositoryNotFound {
                path: path.display().to_string(),
            })?;
        Ok(Self::from_repository(repo))
    }

    pub fn from_repository(repo: git2::Repository) -> Self {
        Self {
            repo,
            include_remotes: false,
        }
    }

    /// Also accept remote-tracking branches such as `origin/release-1.0`.
    pub fn with_remotes(mut self, include_remotes: bool) -> Self {
        self.include_remotes = include_remotes;
        self
    }

    fn branch_types(&self) -> &'static [git2::BranchType] {
        if self.include_remotes {
            &[git2::BranchType::Local, git2::BranchType::Remote]
        } else {
            &[git2::BranchType::Local]
        }
    }

    /// Commit the branch points at. `None` if there is no such branch. Local branches win over
    /// remote ones with the same name.
    fn branch_tip(&self, name: &str) -> Result<Option<git2::Oid>, FinderError> {
        for branch_type in self.branch_types() {
            match self.repo.find_branch(name, *branch_type) {
                Ok(branch) => return Ok(Some(branch.get().peel_to_commit()?.id())),
                // A name git rejects outright cannot be in the branch list either
                Err(e)
                    if matches!(
                        e.code(),
                        git2::ErrorCode::NotFound | git2::ErrorCode::InvalidSpec
                    ) =>
                {
                    continue
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(None)
    }

    fn existing_tip(&self, name: &str) -> Result<git2::Oid, FinderError> {
        self.branch_tip(name)?.ok_or_else(|| FinderError::MissingBranch {
            name: name.to_owned(),
        })
    }

    fn find_commit(&self, hash: &str) -> Result<git2::Commit<'_>, FinderError> {
        let oid = git2::Oid::from_str(hash)?;
        Ok(self.repo.find_commit(oid)?)
    }
}

impl HistoryStore for GitHistory {
    fn branch_exists(&self, name: &str) -> Result<bool, FinderError> {
        Ok(self.branch_tip(name)?.is_some())
    }

    fn non_merge_history(
        &self,
        branch: &str,
        exclude: Option<&str>,
    ) -> Result<Vec<String>, FinderError> {
        let mut revwalk = create_revwalk(&self.repo, self.existing_tip(branch)?)?;
        if let Some(exclude) = exclude {
            // Hiding marks a commit and all its ancestors as uninteresting
            revwalk.hide(self.existing_tip(exclude)?)?;
        }
        let mut hashes = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            if commit.parent_count() > 1 {
                continue;
            }
            hashes.push(commit.id().to_string());
        }
        tracing::debug!(branch, ?exclude, commits = hashes.len(), "walked history");
        Ok(hashes)
    }

    fn metadata_lines(&self, hash: &str) -> Result<Vec<String>, FinderError> {
        let commit = self.find_commit(hash)?;
        let author = commit.author();
        // Same shape as `git log -1 --format=%ae%n%s`: an empty subject leaves a single line.
        // Subjects in a legacy encoding are not UTF-8 but still count as a subject.
        let text = format!(
            "{}\n{}",
            String::from_utf8_lossy(author.email_bytes()),
            commit
                .summary_bytes()
                .map(String::from_utf8_lossy)
                .unwrap_or_default()
        );
        Ok(text.lines().map(str::to_owned).collect())
    }

    fn render_log(&self, hash: &str) -> Result<String, FinderError> {
        let commit = self.find_commit(hash)?;
        Ok(render_commit(&commit))
    }
}

/// Creates a revwalk starting at `tip`, newest commits first.
pub fn create_revwalk(
    repo: &git2::Repository,
    tip: git2::Oid,
) -> Result<git2::Revwalk<'_>, git2::Error> {
    let mut revwalk = repo.revwalk()?;
    // Pushing marks a commit to start traversal from
    revwalk.push(tip)?;
    revwalk.set_sorting(git2::Sort::TIME)?;
    Ok(revwalk)
}

/// Renders a commit the way `git log -1` does by default (the "medium" format).
pub fn render_commit(commit: &git2::Commit<'_>) -> String {
    let author = commit.author();
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "commit {}", commit.id());
    let _ = writeln!(
        out,
        "Author: {} <{}>",
        String::from_utf8_lossy(author.name_bytes()),
        String::from_utf8_lossy(author.email_bytes())
    );
    let _ = writeln!(out, "Date:   {}", format_git_date(author.when()));
    out.push('\n');
    out.push_str(&indent_message(&String::from_utf8_lossy(
        commit.message_bytes(),
    )));
    out
}

/// Formats a timestamp like git's default date format, in the timezone it was recorded in.
/// `Thu Oct 15 09:03:51 2026 +0200`
pub fn format_git_date(time: git2::Time) -> String {
    const FORMAT: &str = "%a %b %-d %H:%M:%S %Y %z";
    let Some(utc) = DateTime::from_timestamp(time.seconds(), 0) else {
        return time.seconds().to_string();
    };
    match FixedOffset::east_opt(time.offset_minutes() * 60) {
        Some(offset) => utc.with_timezone(&offset).format(FORMAT).to_string(),
        // Offset out of range, fall back to UTC
        None => utc.format(FORMAT).to_string(),
    }
}

/// Indents every message line by four spaces. Leading blank lines and trailing whitespace are
/// dropped, blank lines in between keep their indentation.
fn indent_message(message: &str) -> String {
    let mut out = String::new();
    for line in message
        .trim_end()
        .lines()
        .skip_while(|line| line.trim().is_empty())
    {
        out.push_str("    ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
