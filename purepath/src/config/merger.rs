//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use purepath::config::{Config, ConfigMerger};
/// use purepath::OutputFormat;
///
/// let low = Config { format: Some(OutputFormat::Text), ..Default::default() };
/// let high = Config { format: Some(OutputFormat::Json), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.format, Some(OutputFormat::Json));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge source config into target; fields set in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.relative_mode.is_some() {
            target.relative_mode = source.relative_mode;
        }
        if source.format.is_some() {
            target.format = source.format;
        }
    }
}
