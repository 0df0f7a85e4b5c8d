//! Command to replace the stem of a path.

use crate::error::CliError;
use crate::utils::{load_configuration, print_path, to_pure_path, GlobalOptions};
use clap::Args;
use std::ffi::OsString;

/// Replace the stem of a path, keeping its last suffix.
#[derive(Args)]
pub struct WithStemCommand {
    /// Path to edit
    #[arg(value_name = "PATH")]
    pub path: OsString,

    /// New stem
    #[arg(value_name = "STEM")]
    pub stem: String,
}

impl WithStemCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = to_pure_path(&self.path)?;
        print_path(&config, &path.with_stem(&self.stem)?)
    }
}
