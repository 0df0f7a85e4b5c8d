//! Main entry point for the purepath CLI.
//!
//! This is the command-line interface for purepath. Every command wraps one
//! path operation:
//! - `inspect`: Show every derived attribute of one or more paths
//! - `join`, `parent`: Build related paths
//! - `with-name`, `with-stem`, `with-suffix`, `with-suffixes`: Edit the final component
//! - `relative-to`: Express a path relative to another
//! - `uri`: Print the `file://` URI

use clap::Parser;
use purepath_cli::cli::{Cli, Command};
use purepath_cli::error::CliError;
use purepath_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = purepath::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        format: cli.format,
        logger,
    };

    // Execute the command
    let result = match cli.command {
        Command::Inspect(cmd) => cmd.execute(&global),
        Command::Join(cmd) => cmd.execute(&global),
        Command::Parent(cmd) => cmd.execute(&global),
        Command::WithName(cmd) => cmd.execute(&global),
        Command::WithStem(cmd) => cmd.execute(&global),
        Command::WithSuffix(cmd) => cmd.execute(&global),
        Command::WithSuffixes(cmd) => cmd.execute(&global),
        Command::RelativeTo(cmd) => cmd.execute(&global),
        Command::Uri(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            match &e {
                CliError::Library(lib_err) => logger.report(lib_err),
                other => logger.error(&other.to_string()),
            }
            std::process::exit(e.exit_code());
        }
    }
}
