//! Output formatting for path reports.
//!
//! A [`PathReport`] is a snapshot of every derived attribute of a
//! [`PurePath`]. Reports can be rendered as aligned text or as JSON.

mod formatters;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::{PathSyntax, PurePath};
use crate::Result;

pub use formatters::{JsonFormatter, TextFormatter};

/// Trait for formatting path reports into different output formats.
pub trait OutputFormatter {
    /// Format the given reports into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[PathReport]) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use purepath::OutputFormat;
///
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// assert_eq!(OutputFormat::default(), OutputFormat::Text);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned `key value` lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Parses a format from a string ("text" or "json", case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s}")),
        }
    }

    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Every derived attribute of a path, owned and serializable.
///
/// # Examples
///
/// ```
/// use purepath::{PathReport, PurePath};
///
/// let report = PathReport::from(&PurePath::new("/srv/.env.local"));
/// assert_eq!(report.stem, ".env");
/// assert_eq!(report.suffixes, vec![".local"]);
/// assert_eq!(report.uri, "file:///srv/.env.local");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathReport {
    /// The canonical path string.
    pub path: String,
    /// The root, or empty for relative paths.
    pub root: String,
    /// All components, starting with the root.
    pub parts: Vec<String>,
    /// The parent path.
    pub parent: String,
    /// The final component.
    pub name: String,
    /// The final component without its last suffix.
    pub stem: String,
    /// The last suffix.
    pub suffix: String,
    /// All suffixes.
    pub suffixes: Vec<String>,
    /// Whether the path is absolute.
    pub absolute: bool,
    /// The `file://` URI.
    pub uri: String,
}

impl<S: PathSyntax> From<&PurePath<S>> for PathReport {
    fn from(path: &PurePath<S>) -> Self {
        Self {
            path: path.to_string(),
            root: path.root().to_string(),
            parts: path.parts().to_vec(),
            parent: path.parent().to_string(),
            name: path.name().to_string(),
            stem: path.stem().to_string(),
            suffix: path.suffix().to_string(),
            suffixes: path.suffixes().into_iter().map(str::to_string).collect(),
            absolute: path.is_absolute(),
            uri: path.as_uri(),
        }
    }
}
