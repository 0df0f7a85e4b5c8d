//! Command to replace the whole suffix chain of a path.

use crate::error::CliError;
use crate::utils::{load_configuration, print_path, to_pure_path, GlobalOptions};
use clap::Args;
use std::ffi::OsString;

/// Replace the whole suffix chain of a path.
///
/// With no suffixes the chain is removed. `--json` takes the list as a JSON
/// array instead, for callers that already hold one.
#[derive(Args)]
pub struct WithSuffixesCommand {
    /// Path to edit
    #[arg(value_name = "PATH")]
    pub path: OsString,

    /// New suffixes, in order
    #[arg(value_name = "SUFFIX", allow_hyphen_values = true)]
    pub suffixes: Vec<String>,

    /// Suffix list as a JSON array of strings
    #[arg(long, value_name = "ARRAY", conflicts_with = "suffixes")]
    pub json: Option<String>,
}

impl WithSuffixesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = to_pure_path(&self.path)?;

        let edited = match self.json {
            Some(raw) => {
                let value: serde_json::Value = serde_json::from_str(&raw)
                    .map_err(|e| CliError::InvalidArguments(format!("--json: {e}")))?;
                path.with_suffixes_value(&value)?
            }
            None => {
                if self.suffixes.is_empty() {
                    global
                        .logger
                        .debug(&format!("removing every suffix from {path}"));
                }
                path.with_suffixes(&self.suffixes)?
            }
        };

        print_path(&config, &edited)
    }
}
