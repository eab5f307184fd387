//! Dead branch cleanup.
//!
//! Each dead branch goes through a small state machine: a safe delete first,
//! then (only for unmerged branches) a confirmation and a forced delete.

use crate::branch::Branch;
use crate::constants::UNMERGED_HINT;
use crate::git::{self, GitRunner};
use anyhow::Context;
use std::fmt;

/// Capability to ask the user a yes/no question.
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> anyhow::Result<bool>;
}

/// Asks on the terminal, defaulting to "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerConfirmer;

impl Confirmer for DialoguerConfirmer {
    fn confirm(&self, prompt: &str) -> anyhow::Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("Failed to read confirmation")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupOutcome {
    Deleted,
    ForceDeleted,
    /// Unmerged and the user declined the forced delete.
    Kept,
}

impl fmt::Display for CleanupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupOutcome::Deleted => write!(f, "deleted"),
            CleanupOutcome::ForceDeleted => write!(f, "force deleted"),
            CleanupOutcome::Kept => write!(f, "kept"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteState {
    Init,
    SafeDeleteAttempted,
    NeedsConfirmation,
    ForceDeleteAttempted,
    Done(CleanupOutcome),
}

impl fmt::Display for DeleteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteState::Init => write!(f, "queued"),
            DeleteState::SafeDeleteAttempted => write!(f, "deleting"),
            DeleteState::NeedsConfirmation => write!(f, "not fully merged"),
            DeleteState::ForceDeleteAttempted => write!(f, "force deleting"),
            DeleteState::Done(outcome) => write!(f, "{}", outcome),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupResult {
    pub branch: String,
    pub outcome: CleanupOutcome,
}

/// A branch that tracked an upstream which no longer exists.
#[must_use]
pub fn is_dead(branch: &Branch) -> bool {
    branch.has_upstream() && !branch.living
}

#[must_use]
pub fn confirm_prompt(branch: &str) -> String {
    format!("Branch '{}' is not fully merged. Delete it anyway?", branch)
}

/// Deletes every dead branch in listing order.
///
/// Stops at the first fatal error; branches deleted before it stay deleted.
pub fn cleanup<G, C, F>(
    git: &G,
    confirmer: &C,
    branches: &[Branch],
    force: bool,
    on_step: F,
) -> anyhow::Result<Vec<CleanupResult>>
where
    G: GitRunner,
    C: Confirmer,
    F: Fn(&str, &DeleteState),
{
    let mut results = Vec::new();
    for branch in branches.iter().filter(|b| is_dead(b)) {
        // Only local branches declare an upstream, so the full name is the ref
        // name git knows, slashes included.
        let name = branch.full_name();
        let outcome = delete_branch(git, confirmer, &name, force, &on_step)
            .with_context(|| format!("Failed to clean up branch '{}'", name))?;
        results.push(CleanupResult {
            branch: name,
            outcome,
        });
    }
    Ok(results)
}

fn delete_branch<G, C, F>(
    git: &G,
    confirmer: &C,
    name: &str,
    force: bool,
    on_step: &F,
) -> anyhow::Result<CleanupOutcome>
where
    G: GitRunner,
    C: Confirmer,
    F: Fn(&str, &DeleteState),
{
    let mut state = DeleteState::Init;
    loop {
        on_step(name, &state);
        state = match state {
            DeleteState::Init => DeleteState::SafeDeleteAttempted,
            DeleteState::SafeDeleteAttempted => {
                let args = git::delete_branch_args(name, false)?;
                let output = git.run(&args)?;
                if output.success {
                    DeleteState::Done(CleanupOutcome::Deleted)
                } else if output.stderr_text().contains(UNMERGED_HINT) {
                    DeleteState::NeedsConfirmation
                } else {
                    anyhow::bail!("git {} failed: {}", args.join(" "), output.stderr_text())
                }
            }
            DeleteState::NeedsConfirmation => {
                if force || confirmer.confirm(&confirm_prompt(name))? {
                    DeleteState::ForceDeleteAttempted
                } else {
                    DeleteState::Done(CleanupOutcome::Kept)
                }
            }
            DeleteState::ForceDeleteAttempted => {
                let args = git::delete_branch_args(name, true)?;
                git.run(&args)?.into_stdout(&args)?;
                DeleteState::Done(CleanupOutcome::ForceDeleted)
            }
            DeleteState::Done(outcome) => return Ok(outcome),
        };
    }
}
