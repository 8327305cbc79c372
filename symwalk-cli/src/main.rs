//! Main entry point for the symwalk CLI.
//!
//! Commands:
//! - `path`: Resolve each target to its physical path
//! - `list`: List the immediate members of each target directory
//! - `tree`: Walk the whole tree under each target
//! - `completions`: Generate shell completion scripts

use clap::Parser;
use symwalk_cli::cli::{self, Cli};
use symwalk_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    symwalk::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::Path(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Tree(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
