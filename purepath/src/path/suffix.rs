//! Splitting a final path segment into stem and suffixes.
//!
//! Leading dots mark a hidden file rather than an extension, so `.bashrc`
//! and `..bashrc` have no suffix while `.bashrc.bak` has the suffix `.bak`. The special
//! names `.` and `..`, and names ending in a dot, have no suffixes.

use crate::error::{Error, Result};

/// The suffix tokens of a name, in order, each including its leading dot.
///
/// # Examples
///
/// ```
/// use purepath::path::suffix::split_suffixes;
///
/// assert_eq!(split_suffixes("file.tar.gz"), vec![".tar", ".gz"]);
/// assert_eq!(split_suffixes(".file.txt"), vec![".txt"]);
/// assert!(split_suffixes(".file").is_empty());
/// assert!(split_suffixes("dir").is_empty());
/// ```
#[must_use]
pub fn split_suffixes(name: &str) -> Vec<&str> {
    if name.is_empty() || name == ".." || name.ends_with('.') {
        return Vec::new();
    }

    // All leading dots belong to the stem
    let body_start = name.len() - name.trim_start_matches('.').len();
    let body = &name[body_start..];

    let mut starts: Vec<usize> = body
        .match_indices('.')
        .map(|(idx, _)| body_start + idx)
        .collect();
    starts.push(name.len());

    starts.windows(2).map(|w| &name[w[0]..w[1]]).collect()
}

/// The last suffix of a name, or `""` if it has none.
#[must_use]
pub fn last_suffix(name: &str) -> &str {
    split_suffixes(name).last().copied().unwrap_or("")
}

/// The name with its last suffix removed.
///
/// # Examples
///
/// ```
/// use purepath::path::suffix::stem;
///
/// assert_eq!(stem("file.tar.gz"), "file.tar");
/// assert_eq!(stem(".file.txt"), ".file");
/// assert_eq!(stem(".file"), ".file");
/// ```
#[must_use]
pub fn stem(name: &str) -> &str {
    &name[..name.len() - last_suffix(name).len()]
}

/// Whether `suffix` is acceptable as a replacement suffix.
///
/// A valid suffix is either empty or a dot followed by one or more ASCII
/// word characters (`[A-Za-z0-9_]`).
#[must_use]
pub fn is_valid_suffix(suffix: &str) -> bool {
    match suffix.strip_prefix('.') {
        Some(token) => {
            !token.is_empty()
                && token
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'_')
        }
        None => suffix.is_empty(),
    }
}

/// Validate a single replacement suffix.
///
/// # Errors
///
/// Returns [`Error::InvalidSuffix`] naming the suffix if it is invalid.
pub fn validate_suffix(suffix: &str) -> Result<()> {
    if is_valid_suffix(suffix) {
        Ok(())
    } else {
        Err(Error::InvalidSuffix {
            suffix: suffix.to_string(),
            position: None,
        })
    }
}

/// Validate a list of replacement suffixes.
///
/// # Errors
///
/// Returns [`Error::InvalidSuffix`] for the first invalid suffix, carrying
/// its index.
pub fn validate_suffixes<S: AsRef<str>>(suffixes: &[S]) -> Result<()> {
    for (position, suffix) in suffixes.iter().enumerate() {
        let suffix: &str = suffix.as_ref();
        if !is_valid_suffix(suffix) {
            return Err(Error::InvalidSuffix {
                suffix: suffix.to_string(),
                position: Some(position),
            });
        }
    }
    Ok(())
}

/// Extract a suffix list from a dynamically typed JSON value.
///
/// # Errors
///
/// Returns [`Error::InvalidType`] if the value is not an array of strings.
///
/// # Examples
///
/// ```
/// use purepath::path::suffix::suffixes_from_value;
/// use serde_json::json;
///
/// assert_eq!(
///     suffixes_from_value(&json!([".tar", ".gz"])).unwrap(),
///     vec![".tar", ".gz"]
/// );
/// assert!(suffixes_from_value(&json!(".tar.gz")).unwrap_err().is_type_error());
/// ```
pub fn suffixes_from_value(value: &serde_json::Value) -> Result<Vec<String>> {
    let invalid = |found: &serde_json::Value| Error::InvalidType {
        argument: "suffixes",
        expected: "a sequence of strings",
        found: json_type_name(found).to_string(),
    };

    let items = value.as_array().ok_or_else(|| invalid(value))?;
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(|| invalid(item)))
        .collect()
}

/// The JSON type name of a value, as used in type errors.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
