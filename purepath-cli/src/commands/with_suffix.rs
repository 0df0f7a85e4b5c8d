//! Command to replace the last suffix of a path.

use crate::error::CliError;
use crate::utils::{load_configuration, print_path, to_pure_path, GlobalOptions};
use clap::Args;
use std::ffi::OsString;

/// Replace the last suffix of a path.
///
/// Pass an empty string to remove the suffix.
#[derive(Args)]
pub struct WithSuffixCommand {
    /// Path to edit
    #[arg(value_name = "PATH")]
    pub path: OsString,

    /// New suffix, such as `.md`
    #[arg(value_name = "SUFFIX", allow_hyphen_values = true)]
    pub suffix: String,
}

impl WithSuffixCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = to_pure_path(&self.path)?;
        print_path(&config, &path.with_suffix(&self.suffix)?)
    }
}
