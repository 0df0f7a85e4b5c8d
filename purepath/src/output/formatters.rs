//! Output formatter implementations.

use crate::{Error, Result};

use super::{OutputFormatter, PathReport};

/// Formatter for pretty-printed JSON.
///
/// A single report is written as an object, several as an array.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[PathReport]) -> Result<String> {
        let rendered = match reports {
            [single] => serde_json::to_string_pretty(single),
            many => serde_json::to_string_pretty(many),
        };

        rendered.map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for human-readable blocks of aligned `key value` lines.
pub struct TextFormatter;

impl TextFormatter {
    fn quoted_list(items: &[String]) -> String {
        let quoted: Vec<String> = items.iter().map(|s| format!("{s:?}")).collect();
        format!("[{}]", quoted.join(", "))
    }

    fn block(report: &PathReport) -> String {
        let rows = [
            ("path", report.path.clone()),
            ("root", report.root.clone()),
            ("parts", Self::quoted_list(&report.parts)),
            ("parent", report.parent.clone()),
            ("name", report.name.clone()),
            ("stem", report.stem.clone()),
            ("suffix", report.suffix.clone()),
            ("suffixes", Self::quoted_list(&report.suffixes)),
            ("absolute", report.absolute.to_string()),
            ("uri", report.uri.clone()),
        ];

        rows.iter()
            .map(|(key, value)| format!("{key:<9} {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[PathReport]) -> Result<String> {
        Ok(reports
            .iter()
            .map(Self::block)
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}
