//! Command-line arguments.

use crate::config::Config;
use crate::filter::Filter;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "git-branches")]
#[command(version, about = "Manage branches with interfaces")]
pub struct Cli {
    /// Run as if git was started in <path> instead of the current working directory
    #[arg(short = 'C', long, global = true, value_name = "path")]
    pub directory: Option<PathBuf>,

    /// Print each git command and cleanup step
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress the cleanup summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    #[must_use]
    pub fn config(&self) -> Config {
        Config::from_flags(self.quiet, self.verbose)
    }

    /// The subcommand to run; `list` without filters when none was given.
    #[must_use]
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::List(ListArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show each branch, upstream, author in git repository
    List(ListArgs),
    /// Cleanup dead (lost upstream) branches
    Cleanup(CleanupArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    /// Output without ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Only show branches matching all of the given filters
    #[arg(value_enum)]
    pub filters: Vec<Filter>,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupArgs {
    /// Delete unmerged dead branches without asking (`git branch -D`)
    #[arg(short, long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Verbosity;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("git-branches").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_list_is_default_command() {
        assert_eq!(parse(&[]).command(), Command::List(ListArgs::default()));
    }

    #[test]
    fn test_list_accepts_filters() {
        let cli = parse(&["list", "--no-color", "upstream", "!living"]);
        assert_eq!(
            cli.command(),
            Command::List(ListArgs {
                no_color: true,
                filters: vec![Filter::Upstream, Filter::NotLiving],
            })
        );
    }

    #[test]
    fn test_list_rejects_unknown_filter() {
        assert!(Cli::try_parse_from(["git-branches", "list", "dead"]).is_err());
    }

    #[test]
    fn test_cleanup_with_directory_and_force() {
        let cli = parse(&["-C", "/tmp/repo", "cleanup", "--force"]);
        assert_eq!(cli.directory, Some(PathBuf::from("/tmp/repo")));
        assert_eq!(cli.command(), Command::Cleanup(CleanupArgs { force: true }));
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(parse(&["-v", "cleanup"]).config().verbosity, Verbosity::Verbose);
        assert_eq!(parse(&["cleanup", "-q"]).config().verbosity, Verbosity::Quiet);
        assert!(Cli::try_parse_from(["git-branches", "-q", "-v"]).is_err());
    }
}
