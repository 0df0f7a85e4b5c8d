//! Command to print the parent of a path.

use crate::error::CliError;
use crate::utils::{load_configuration, print_path, to_pure_path, GlobalOptions};
use clap::Args;
use std::ffi::OsString;

/// Print the parent of a path.
#[derive(Args)]
pub struct ParentCommand {
    /// Path whose parent to print
    #[arg(value_name = "PATH")]
    pub path: OsString,
}

impl ParentCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = to_pure_path(&self.path)?;
        print_path(&config, &path.parent())
    }
}
