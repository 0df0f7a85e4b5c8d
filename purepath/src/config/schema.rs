//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::path::RelativeMode;

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be merged; the accessors fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use purepath::config::Config;
/// use purepath::{OutputFormat, RelativeMode};
///
/// let config: Config = serde_yaml::from_str("relative_mode: string-prefix\n").unwrap();
/// assert_eq!(config.relative_mode(), RelativeMode::StringPrefix);
/// assert_eq!(config.format(), OutputFormat::Text);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How `relative-to` decides that one path lies beneath another.
    pub relative_mode: Option<RelativeMode>,

    /// Output format for reports.
    pub format: Option<OutputFormat>,
}

impl Config {
    /// The configured relative mode, or the default.
    #[must_use]
    pub fn relative_mode(&self) -> RelativeMode {
        self.relative_mode.unwrap_or_default()
    }

    /// The configured output format, or the default.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}
