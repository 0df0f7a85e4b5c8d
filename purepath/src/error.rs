//! Error types for the purepath library.
//!
//! This module provides the error hierarchy for path construction, path
//! edits and configuration loading, using `thiserror` for ergonomic error
//! handling.

use std::fmt;

use thiserror::Error;

/// Result type alias for operations that may fail with a purepath error.
///
/// # Examples
///
/// ```
/// use purepath::{PurePath, Result};
///
/// fn rename(path: &PurePath) -> Result<PurePath> {
///     path.with_name("renamed.txt")
/// }
///
/// assert!(rename(&PurePath::new("/a/b.txt")).is_ok());
/// assert!(rename(&PurePath::new("/")).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
///
/// Callers that only care whether an argument had the wrong shape or the
/// operation was structurally invalid can match on the kind instead of
/// individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument had the wrong type (e.g. a JSON number where a path
    /// string was expected).
    Type,
    /// An argument had the right type but an invalid value, or the
    /// operation does not apply to the receiver.
    Value,
    /// Configuration could not be read or validated.
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type => write!(f, "type error"),
            Self::Value => write!(f, "value error"),
            Self::Config => write!(f, "configuration error"),
        }
    }
}

/// The main error type for the purepath library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was not of an accepted type.
    #[error("Invalid type for argument {argument}. Expected {expected}, got {found}")]
    InvalidType {
        /// The argument that was rejected.
        argument: &'static str,
        /// Human-readable list of accepted types.
        expected: &'static str,
        /// The type name of the value actually supplied.
        found: String,
    },

    /// A path is not located beneath the path it was made relative to.
    #[error("'{path}' does not start with '{other}'")]
    NotRelative {
        /// The path being made relative.
        path: String,
        /// The path it was compared against.
        other: String,
    },

    /// The path has no final component that could be replaced.
    #[error("PurePath('{path}') has an empty {component}")]
    EmptyName {
        /// The offending path.
        path: String,
        /// Which component was being replaced (`name` or `suffix`).
        component: &'static str,
    },

    /// A replacement name is not a single path segment.
    #[error("Invalid name '{name}'")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// A suffix does not look like `.ext`.
    #[error("Invalid suffix '{suffix}'{}", .position.map(|p| format!(" at pos {p}")).unwrap_or_default())]
    InvalidSuffix {
        /// The rejected suffix.
        suffix: String,
        /// Index of the suffix within a suffix list, if one was given.
        position: Option<usize>,
    },

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classify the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use purepath::{ErrorKind, PurePath};
    ///
    /// let err = PurePath::new("/").with_name("x").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Value);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } => ErrorKind::Type,
            Self::NotRelative { .. }
            | Self::EmptyName { .. }
            | Self::InvalidName { .. }
            | Self::InvalidSuffix { .. } => ErrorKind::Value,
            Self::Validation { .. } | Self::Io(_) => ErrorKind::Config,
        }
    }

    /// Check if the error is a type error.
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    /// Check if the error is a value error.
    #[must_use]
    pub fn is_value_error(&self) -> bool {
        self.kind() == ErrorKind::Value
    }
}
