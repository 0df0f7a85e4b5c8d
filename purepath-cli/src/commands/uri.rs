//! Command to print the `file://` URI of a path.

use crate::error::CliError;
use crate::utils::{load_configuration, to_pure_path, GlobalOptions};
use clap::Args;
use purepath::OutputFormat;
use std::ffi::OsString;

/// Print the `file://` URI of a path.
#[derive(Args)]
pub struct UriCommand {
    /// Path to convert
    #[arg(value_name = "PATH")]
    pub path: OsString,
}

impl UriCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = to_pure_path(&self.path)?;

        if !path.is_absolute() {
            global
                .logger
                .warn(&format!("'{path}' is relative; the URI will not resolve"));
        }

        let uri = path.as_uri();
        match config.format() {
            OutputFormat::Text => println!("{uri}"),
            OutputFormat::Json => println!("{}", serde_json::json!({ "uri": uri })),
        }
        Ok(())
    }
}
