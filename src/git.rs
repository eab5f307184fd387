//! Git command wrappers.
//!
//! This module provides a thin wrapper around the git CLI: running commands
//! against an optional target directory, and building the argument lists
//! the resolver and the cleanup engine depend on.

use anyhow::Context;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Callback invoked with the full argument list before each git command runs.
pub type GitLogger = fn(&[String]);

/// Prints the git command about to run on stderr.
pub fn verbose_logger(args: &[String]) {
    eprintln!("{}", format!("$ git {}", args.join(" ")).dimmed());
}

pub fn no_op_logger(_args: &[String]) {}

/// Raw result of one git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub success: bool,
}

impl GitOutput {
    #[must_use]
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }

    /// Returns stdout, or an error carrying stderr when git exited abnormally.
    pub fn into_stdout(self, args: &[&str]) -> anyhow::Result<String> {
        if self.success {
            Ok(String::from_utf8_lossy(&self.stdout).into_owned())
        } else {
            anyhow::bail!("git {} failed: {}", args.join(" "), self.stderr_text())
        }
    }
}

/// Capability to run git with the given arguments.
///
/// `Err` means git could not be executed at all; a non-zero exit is reported
/// through [`GitOutput::success`] so callers can inspect the diagnostic.
pub trait GitRunner {
    fn run(&self, args: &[&str]) -> anyhow::Result<GitOutput>;
}

/// Runs the system `git` binary, optionally as if started in `directory`.
#[derive(Debug, Clone)]
pub struct SystemGit {
    directory: Option<PathBuf>,
    logger: GitLogger,
}

impl SystemGit {
    pub fn new(directory: Option<PathBuf>, logger: GitLogger) -> Self {
        Self { directory, logger }
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> anyhow::Result<GitOutput> {
        let args = with_directory(args, self.directory());
        (self.logger)(&args);

        let output = std::process::Command::new("git")
            .args(&args)
            .output()
            .context("Failed to execute git command")?;

        Ok(GitOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            success: output.status.success(),
        })
    }
}

/// Prepends `-C <dir>` when a non-empty directory is given.
///
/// The option must precede the subcommand for git to accept it.
pub fn with_directory(args: &[&str], directory: Option<&Path>) -> Vec<String> {
    let mut full = Vec::with_capacity(args.len() + 2);
    if let Some(dir) = directory.filter(|d| !d.as_os_str().is_empty()) {
        full.push("-C".to_string());
        full.push(dir.to_string_lossy().into_owned());
    }
    full.extend(args.iter().map(|a| a.to_string()));
    full
}

/// Format emitting `HEAD, name, author, upstream, date` per ref, tab separated.
///
/// Stash, tags and symbolic `*/HEAD` refs produce no fields at all.
fn ref_list_format() -> String {
    [
        "%(if:notequals=refs/stash)%(refname:rstrip=-2)%(then)",
        "%(if:notequals=refs/tags)%(refname:rstrip=-2)%(then)",
        "%(if:notequals=HEAD)%(refname:lstrip=3)%(then)",
        "%(HEAD)%09%(refname:lstrip=2)%09%(authorname)%09",
        "%(if)%(upstream)%(then)",
        "%(upstream:lstrip=2)",
        "%(end)",
        "%09%(committerdate:format-local:%Y/%m/%d %H:%M:%S)",
        "%(end)",
        "%(end)",
        "%(end)",
    ]
    .concat()
}

pub fn for_each_ref_args() -> Vec<String> {
    vec![
        "for-each-ref".to_string(),
        "--format".to_string(),
        ref_list_format(),
    ]
}

fn validate_branch_name(branch: &str) -> anyhow::Result<()> {
    if branch.contains('\0') || branch.contains('\n') || branch.is_empty() {
        anyhow::bail!("Invalid branch name: {:?}", branch);
    }
    Ok(())
}

/// Arguments for `git branch -d` (safe) or `git branch -D` (forced).
pub fn delete_branch_args(branch: &str, force: bool) -> anyhow::Result<[&str; 3]> {
    validate_branch_name(branch)?;
    let flag = if force { "-D" } else { "-d" };
    Ok(["branch", flag, branch])
}
