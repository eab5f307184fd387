//! Branch topology resolution.
//!
//! Parses the output of the reference-list query into [`Branch`] records and
//! derives which branches are still followed by some other reference.

use crate::constants::{CURRENT_MARKER, FIELD_SEPARATOR, REF_FIELD_COUNT};
use crate::git::{self, GitRunner};
use anyhow::Context;
use std::collections::HashMap;

/// One local or remote-tracking branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    /// Remote the branch lives on; empty for a local branch.
    pub remote: String,
    pub current: bool,
    pub committer: String,
    /// Full name of the tracked branch, empty when untracked.
    pub upstream: String,
    /// Set by [`resolve`] when another listed ref matches this branch's upstream.
    pub living: bool,
}

impl Branch {
    /// `remote/name` for remote branches, `name` otherwise.
    #[must_use]
    pub fn full_name(&self) -> String {
        if self.remote.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.remote, self.name)
        }
    }

    #[must_use]
    pub fn has_upstream(&self) -> bool {
        !self.upstream.is_empty()
    }
}

/// Parses one reference line, or `None` when it has too few fields.
pub fn parse_ref_line(line: &str) -> Option<Branch> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < REF_FIELD_COUNT {
        return None;
    }

    let (remote, name) = match fields[1].split_once('/') {
        Some((remote, name)) => (remote.to_string(), name.to_string()),
        None => (String::new(), fields[1].to_string()),
    };

    Some(Branch {
        name,
        remote,
        current: fields[0] == CURRENT_MARKER,
        committer: fields[2].to_string(),
        upstream: fields[3].to_string(),
        living: false,
    })
}

/// Resolves reference-list output into branches, in listing order.
///
/// A ref whose full name was already declared as an upstream marks the
/// declaring branch as living and is dropped from the result: it is the
/// remote-tracking mirror of that branch, not a branch of its own.
pub fn resolve(output: &str) -> Vec<Branch> {
    let mut parsed: Vec<Branch> = Vec::new();
    let mut dropped: Vec<bool> = Vec::new();
    // upstream full name -> index of the (latest) branch declaring it
    let mut followees: HashMap<String, usize> = HashMap::new();

    for branch in output.lines().filter_map(parse_ref_line) {
        let index = parsed.len();
        if branch.has_upstream() {
            followees.insert(branch.upstream.clone(), index);
        }

        let follower = followees.get(&branch.full_name()).copied();
        parsed.push(branch);
        dropped.push(false);

        if let Some(follower) = follower {
            parsed[follower].living = true;
            dropped[index] = true;
        }
    }

    parsed
        .into_iter()
        .zip(dropped)
        .filter_map(|(branch, dropped)| (!dropped).then_some(branch))
        .collect()
}

/// Queries git for all branches and resolves their topology.
pub fn list_branches(git: &impl GitRunner) -> anyhow::Result<Vec<Branch>> {
    let args = git::for_each_ref_args();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let stdout = git
        .run(&args)
        .and_then(|output| output.into_stdout(&args))
        .context("Failed to list branches")?;
    Ok(resolve(&stdout))
}
