//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, InspectCommand, JoinCommand, ParentCommand, RelativeToCommand,
    UriCommand, WithNameCommand, WithStemCommand, WithSuffixCommand, WithSuffixesCommand,
};
use clap::{Parser, Subcommand};
use purepath::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for inspecting and editing path strings.
#[derive(Parser)]
#[command(name = "purepath")]
#[command(
    version,
    about = "Inspect and edit path strings without touching disk",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file to load on top of any discovered purepath.yaml
    #[arg(long, value_name = "FILE", global = true, env = "PUREPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, value_name = "FORMAT", global = true, value_parser = OutputFormat::parse)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show every derived attribute of one or more paths
    Inspect(InspectCommand),

    /// Append segments to a base path
    Join(JoinCommand),

    /// Print the parent of a path
    Parent(ParentCommand),

    /// Replace the final component of a path
    WithName(WithNameCommand),

    /// Replace the stem of a path, keeping its last suffix
    WithStem(WithStemCommand),

    /// Replace the last suffix of a path
    WithSuffix(WithSuffixCommand),

    /// Replace the whole suffix chain of a path
    WithSuffixes(WithSuffixesCommand),

    /// Express a path relative to another
    RelativeTo(RelativeToCommand),

    /// Print the file:// URI of a path
    Uri(UriCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
