//! Branch filters for the `list` command.

use crate::branch::Branch;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Filter {
    /// The checked-out branch
    #[value(name = "current")]
    Current,
    #[value(name = "!current")]
    NotCurrent,
    /// Branches followed by another ref
    #[value(name = "living")]
    Living,
    #[value(name = "!living")]
    NotLiving,
    /// Branches tracking an upstream
    #[value(name = "upstream")]
    Upstream,
    #[value(name = "!upstream")]
    NotUpstream,
}

impl Filter {
    #[must_use]
    pub fn matches(self, branch: &Branch) -> bool {
        match self {
            Filter::Current => branch.current,
            Filter::NotCurrent => !branch.current,
            Filter::Living => branch.living,
            Filter::NotLiving => !branch.living,
            Filter::Upstream => branch.has_upstream(),
            Filter::NotUpstream => !branch.has_upstream(),
        }
    }
}

/// True when the branch passes every filter; an empty list passes everything.
#[must_use]
pub fn matches_all(filters: &[Filter], branch: &Branch) -> bool {
    filters.iter().all(|f| f.matches(branch))
}
