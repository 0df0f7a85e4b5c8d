//! Inspect command implementation.
//!
//! This module implements the `inspect` command, which prints every derived
//! attribute of each path in the configured output format.

use crate::error::CliError;
use crate::utils::{format_reports, load_configuration, to_pure_path, GlobalOptions};
use clap::Args;
use purepath::PathReport;
use std::ffi::OsString;

/// Show every derived attribute of one or more paths.
#[derive(Args)]
pub struct InspectCommand {
    /// Paths to inspect
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<OsString>,
}

impl InspectCommand {
    /// Execute the inspect command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Build a report per path
        let reports = self
            .paths
            .iter()
            .map(|raw| to_pure_path(raw).map(|path| PathReport::from(&path)))
            .collect::<Result<Vec<_>, _>>()?;

        // 3. Render
        println!("{}", format_reports(config.format(), &reports)?);
        Ok(())
    }
}
