//! Command to replace the final component of a path.

use crate::error::CliError;
use crate::utils::{load_configuration, print_path, to_pure_path, GlobalOptions};
use clap::Args;
use std::ffi::OsString;

/// Replace the final component of a path.
#[derive(Args)]
pub struct WithNameCommand {
    /// Path to edit
    #[arg(value_name = "PATH")]
    pub path: OsString,

    /// New final component
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl WithNameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = to_pure_path(&self.path)?;
        print_path(&config, &path.with_name(&self.name)?)
    }
}
