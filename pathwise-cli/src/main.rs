//! Main entry point for the pathwise CLI.
//!
//! Commands:
//! - `slash`: Join path segments
//! - `resolve`: Resolve dot segments lexically
//! - `resolve-real`: Canonicalize an existing path
//! - `is-beneath`: Assert path containment
//! - `remove`: Recursively remove a directory

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let _logger = pathwise::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        separator: cli.separator,
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::Slash(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::ResolveReal(cmd) => cmd.execute(&global),
        cli::Command::IsBeneath(cmd) => cmd.execute(&global),
        cli::Command::Remove(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet || !matches!(e, error::CliError::SemanticFailure(_)) {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
