//! Command to express a path relative to another.

use crate::error::CliError;
use crate::utils::{load_configuration, print_path, to_pure_path, GlobalOptions};
use clap::Args;
use purepath::RelativeMode;
use std::ffi::OsString;

/// Express a path relative to another.
///
/// Fails with exit code 1 unless OTHER contains PATH.
#[derive(Args)]
pub struct RelativeToCommand {
    /// Path to make relative
    #[arg(value_name = "PATH")]
    pub path: OsString,

    /// Path to make it relative to
    #[arg(value_name = "OTHER")]
    pub other: OsString,

    /// Comparison mode (segments or string-prefix); defaults to the
    /// configured mode
    #[arg(long, value_name = "MODE", value_parser = RelativeMode::parse)]
    pub mode: Option<RelativeMode>,
}

impl RelativeToCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mode = self.mode.unwrap_or_else(|| config.relative_mode());

        let path = to_pure_path(&self.path)?;
        let other = to_pure_path(&self.other)?;
        global
            .logger
            .debug(&format!("comparing {path} against {other} ({mode})"));

        let relative = path.relative_to_with(&other, mode)?;
        print_path(&config, &relative)
    }
}
