//! Test infrastructure for git-branches integration tests.

#![allow(dead_code)]

use anyhow::Result;
use git_branches::cleanup::Confirmer;
use git_branches::git::{GitRunner, SystemGit, no_op_logger};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary git repository for testing.
/// Automatically cleaned up when dropped.
pub struct TestRepo {
    _temp_dir: TempDir,
    path: PathBuf,
    git: SystemGit,
}

impl TestRepo {
    /// Creates a new test repository with an initial commit on the master branch.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();
        let git = SystemGit::new(Some(path.clone()), no_op_logger);
        let repo = Self {
            _temp_dir: temp_dir,
            path,
            git,
        };

        repo.git(&["init", "-b", "master"])?;
        repo.git(&["config", "user.email", "test@example.com"])?;
        repo.git(&["config", "user.name", "Test User"])?;
        repo.commit_file("README.md", "# Test Repo\n")?;

        Ok(repo)
    }

    /// Creates a test repository whose master tracks a bare remote.
    /// Returns the repo and the remote TempDir (must be kept alive).
    pub fn with_remote() -> Result<(Self, TempDir)> {
        let remote_dir = TempDir::new()?;
        let bare = SystemGit::new(Some(remote_dir.path().to_path_buf()), no_op_logger);
        bare.run(&["init", "--bare"])?.into_stdout(&["init", "--bare"])?;

        let local = Self::new()?;
        let remote_path = remote_dir.path().to_string_lossy().into_owned();
        local.git(&["remote", "add", "origin", &remote_path])?;
        local.git(&["push", "-u", "origin", "master"])?;

        Ok((local, remote_dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runner bound to this repository through `-C`.
    pub fn runner(&self) -> &SystemGit {
        &self.git
    }

    pub fn git(&self, args: &[&str]) -> Result<String> {
        self.git.run(args)?.into_stdout(args)
    }

    pub fn commit_file(&self, name: &str, content: &str) -> Result<()> {
        std::fs::write(self.path.join(name), content)?;
        self.git(&["add", name])?;
        self.git(&["commit", "-m", &format!("Update {}", name)])?;
        Ok(())
    }

    pub fn create_branch(&self, name: &str) -> Result<()> {
        self.git(&["branch", name])?;
        Ok(())
    }

    /// Pushes `name` with tracking, then deletes it on the remote so the
    /// local branch is left pointing at a gone upstream.
    pub fn orphan_branch(&self, name: &str) -> Result<()> {
        self.git(&["push", "-u", "origin", name])?;
        self.git(&["push", "origin", "--delete", name])?;
        self.git(&["fetch", "--prune", "origin"])?;
        Ok(())
    }

    /// Creates `name` with one commit master does not have, then returns to master.
    pub fn create_unmerged_branch(&self, name: &str) -> Result<()> {
        self.git(&["checkout", "-b", name])?;
        self.commit_file(&format!("{}.txt", name), "work in progress\n")?;
        self.git(&["checkout", "master"])?;
        Ok(())
    }

    pub fn branch_exists(&self, name: &str) -> Result<bool> {
        let output = self.git(&["branch", "--list", name])?;
        Ok(!output.trim().is_empty())
    }
}

/// Confirmer with a fixed answer that records every prompt.
pub struct ScriptedConfirmer {
    answer: bool,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirmer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.answer)
    }
}
