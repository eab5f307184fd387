use clap::Parser;
use git_branches::branch;
use git_branches::cleanup::{self, DialoguerConfirmer};
use git_branches::cli::{Cli, Command};
use git_branches::git::SystemGit;
use git_branches::output;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    let git = SystemGit::new(cli.directory.clone(), config.git_logger());

    match cli.command() {
        Command::List(args) => {
            output::set_color(!args.no_color);
            let branches = branch::list_branches(&git)?;
            output::print_branches(&branches, &args.filters);
        }
        Command::Cleanup(args) => {
            let branches = branch::list_branches(&git)?;
            let results = cleanup::cleanup(
                &git,
                &DialoguerConfirmer,
                &branches,
                args.force,
                |name, state| output::print_step(&config, name, state),
            )?;
            output::print_cleanup_summary(&results, &config);
        }
    }

    Ok(())
}
