//! Lexical path values.
//!
//! This module provides [`PurePath`], an immutable path string that is
//! normalized once and then only inspected or rebuilt, never resolved
//! against a real filesystem.
//!
//! # Key Concepts
//!
//! ## Syntax
//!
//! [`PathSyntax`] supplies the string primitives (join, normalize, root,
//! dirname, basename) for one separator convention. [`Posix`] is the default.
//!
//! ## Normalization
//!
//! Construction joins the given segments and normalizes the result:
//! - Repeated separators collapse to one
//! - `.` segments are removed
//! - `..` removes the preceding segment, and is dropped at the root
//! - A trailing separator is removed
//!
//! ## Names and suffixes
//!
//! The final segment splits into a stem and a chain of suffixes. A leading
//! dot marks a hidden file, not a suffix:
//!
//! ```
//! use purepath::PurePath;
//!
//! let hidden = PurePath::new("/home/user/.bashrc");
//! assert_eq!(hidden.stem(), ".bashrc");
//! assert!(hidden.suffixes().is_empty());
//!
//! let backup = PurePath::new("/home/user/.bashrc.bak");
//! assert_eq!(backup.stem(), ".bashrc");
//! assert_eq!(backup.suffix(), ".bak");
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use purepath::{PathRelationship, PurePath};
//!
//! let parent = PurePath::new("/home/user");
//! let child = PurePath::new("/home/user/project");
//!
//! let rel = PathRelationship::between(&parent, &child);
//! assert_eq!(rel, PathRelationship::Ancestor);
//! assert_eq!(child.relative_to(&parent).unwrap().as_str(), "project");
//! ```

mod pure;
pub mod relationship;
pub mod suffix;
pub mod syntax;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use pure::PurePath;
pub use relationship::{PathRelationship, RelativeMode};
pub use syntax::{PathSyntax, Posix};
