//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including argument conversion, configuration loading, and output
//! formatting.

use crate::error::CliError;
use purepath::{Config, ConfigBuilder, Logger, OutputFormat, PathReport, PurePath};
use std::ffi::OsStr;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Output format requested on the command line.
    pub format: Option<OutputFormat>,

    /// Logger configured from the verbosity flags.
    pub logger: Logger,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. `purepath.yaml` discovered from the current directory
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(Config {
        format: global.format,
        ..Config::default()
    });

    if let Some(ref path) = global.config {
        global
            .logger
            .debug(&format!("loading configuration from {}", path.display()));
        builder = builder.with_config_file(path);
    }

    let config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    global.logger.debug(&format!(
        "relative mode: {}, format: {}",
        config.relative_mode(),
        config.format()
    ));

    Ok(config)
}

/// Convert a raw command-line argument into a path.
///
/// Arguments that are not valid UTF-8 are rejected with a type error.
pub fn to_pure_path(raw: &OsStr) -> Result<PurePath, CliError> {
    PurePath::try_from(raw).map_err(CliError::from)
}

/// Render reports in the configured format.
pub fn format_reports(format: OutputFormat, reports: &[PathReport]) -> Result<String, CliError> {
    let formatter = format.create_formatter();
    formatter.format(reports).map_err(CliError::from)
}

/// Print a path produced by a command.
///
/// Text output is the bare path string; JSON output is the full report.
pub fn print_path(config: &Config, path: &PurePath) -> Result<(), CliError> {
    match config.format() {
        OutputFormat::Text => println!("{path}"),
        OutputFormat::Json => {
            println!("{}", format_reports(OutputFormat::Json, &[PathReport::from(path)])?);
        }
    }

    Ok(())
}
