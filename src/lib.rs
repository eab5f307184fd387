//! Git branch inspection and cleanup library.
//!
//! This crate lists local and remote branches together with their upstreams,
//! works out which branches are still followed ("living") and which lost
//! their upstream ("dead"), and deletes the dead ones:
//! - Safe delete first
//! - Confirmation (or `--force`) for unmerged branches
//! - Forced delete

pub mod branch;
pub mod cleanup;
pub mod cli;
pub mod config;
pub mod constants;
pub mod filter;
pub mod git;
pub mod output;
