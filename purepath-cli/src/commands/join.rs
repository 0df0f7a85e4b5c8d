//! Command to append segments to a base path.

use crate::error::CliError;
use crate::utils::{load_configuration, print_path, to_pure_path, GlobalOptions};
use clap::Args;
use std::ffi::OsString;

/// Append segments to a base path.
///
/// Absolute segments are appended, not substituted: `join /a /b` is `/a/b`.
#[derive(Args)]
pub struct JoinCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: OsString,

    /// Segments to append
    #[arg(value_name = "SEGMENT", required = true)]
    pub segments: Vec<OsString>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let base = to_pure_path(&self.base)?;
        let segments = self
            .segments
            .iter()
            .map(|raw| to_pure_path(raw))
            .collect::<Result<Vec<_>, _>>()?;

        print_path(&config, &base.join(&segments))
    }
}
