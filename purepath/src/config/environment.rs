//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PUREPATH_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::path::RelativeMode;

/// Overrides `relative_mode`.
pub const RELATIVE_MODE_ENV: &str = "PUREPATH_RELATIVE_MODE";

/// Overrides `format`.
pub const FORMAT_ENV: &str = "PUREPATH_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use purepath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(mode) = env::var(RELATIVE_MODE_ENV) {
            config.relative_mode = Some(RelativeMode::parse(&mode).map_err(|message| {
                Error::Validation {
                    field: RELATIVE_MODE_ENV.into(),
                    message,
                }
            })?);
        }

        if let Ok(format) = env::var(FORMAT_ENV) {
            config.format = Some(OutputFormat::parse(&format).map_err(|message| {
                Error::Validation {
                    field: FORMAT_ENV.into(),
                    message,
                }
            })?);
        }

        Ok(())
    }
}
