#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

/// Throwaway repository. Commits are made straight onto branch refs, nothing is checked out.
pub struct Fixture {
    pub dir: TempDir,
    pub repo: Repository,
    clock: i64,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let repo = Repository::init(dir.path()).expect("Failed to init repository");
        Self {
            dir,
            repo,
            // 2026-01-05 12:00:00 UTC
            clock: 1_767_614_400,
        }
    }

    fn tick(&mut self) -> Time {
        self.clock += 60;
        Time::new(self.clock, 60)
    }

    /// Commits on top of `branch` (creating it from nothing if needed) with the given author.
    /// The committer is always the release manager, like a cherry-pick would leave it.
    pub fn commit(&mut self, branch: &str, author_email: &str, message: &str) -> Oid {
        let parents = self.tip(branch).into_iter().collect::<Vec<_>>();
        self.commit_with_parents(branch, author_email, message, &parents)
    }

    pub fn commit_with_parents(
        &mut self,
        branch: &str,
        author_email: &str,
        message: &str,
        parents: &[Oid],
    ) -> Oid {
        let when = self.tick();
        let author = Signature::new("Some Author", author_email, &when).expect("author signature");
        let committer =
            Signature::new("Release Manager", "release@example.com", &when).expect("signature");
        let tree_id = self
            .repo
            .treebuilder(None)
            .expect("treebuilder")
            .write()
            .expect("write empty tree");
        let tree = self.repo.find_tree(tree_id).expect("find tree");
        let parents: Vec<git2::Commit<'_>> = parents
            .iter()
            .map(|oid| self.repo.find_commit(*oid).expect("find parent"))
            .collect();
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();
        self.repo
            .commit(
                Some(&format!("refs/heads/{}", branch)),
                &author,
                &committer,
                message,
                &tree,
                &parent_refs,
            )
            .expect("Failed to commit")
    }

    /// Writes a commit object byte for byte and moves `branch` onto it. For commits git2's
    /// commit builder will not produce, like messages in a legacy encoding.
    pub fn raw_commit(
        &mut self,
        branch: &str,
        author_email: &str,
        header_extra: &str,
        message: &[u8],
    ) -> Oid {
        let when = self.tick();
        let tree_id = self
            .repo
            .treebuilder(None)
            .expect("treebuilder")
            .write()
            .expect("write empty tree");
        let mut raw = format!("tree {}\n", tree_id);
        if let Some(parent) = self.tip(branch) {
            raw.push_str(&format!("parent {}\n", parent));
        }
        raw.push_str(&format!(
            "author Some Author <{}> {} +0100\ncommitter Release Manager <release@example.com> {} +0100\n{}\n",
            author_email,
            when.seconds(),
            when.seconds(),
            header_extra
        ));
        let mut raw = raw.into_bytes();
        raw.extend_from_slice(message);
        let oid = self
            .repo
            .odb()
            .expect("odb")
            .write(git2::ObjectType::Commit, &raw)
            .expect("write raw commit");
        self.repo
            .reference(&format!("refs/heads/{}", branch), oid, true, "raw commit")
            .expect("move branch");
        oid
    }

    /// Points a new branch at `target`.
    pub fn branch(&self, name: &str, target: Oid) {
        let commit = self.repo.find_commit(target).expect("find commit");
        self.repo.branch(name, &commit, false).expect("create branch");
    }

    pub fn tip(&self, branch: &str) -> Option<Oid> {
        self.repo
            .find_branch(branch, git2::BranchType::Local)
            .ok()
            .and_then(|branch| branch.get().target())
    }

    /// `main` with a root commit, `release` branched off it.
    pub fn with_release_branch() -> Self {
        let mut fixture = Self::new();
        let root = fixture.commit("main", "init@example.com", "Initial commit");
        fixture.branch("release", root);
        fixture
    }
}
