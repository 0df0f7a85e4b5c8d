#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # purepath
//!
//! Filesystem-independent path values.
//!
//! A [`PurePath`] wraps a normalized path string and answers questions about
//! it (root, parts, name, stem, suffixes, parent) or builds new paths from
//! structural edits (join, rename, re-stem, re-suffix, make relative). No
//! operation touches the disk.
//!
//! ## Core Types
//!
//! - [`PurePath`]: the immutable path value
//! - [`PathSyntax`] and [`Posix`]: the string primitives paths are built on
//! - [`PathRelationship`] and [`RelativeMode`]: ancestor checks
//! - [`Error`], [`ErrorKind`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use purepath::PurePath;
//!
//! let path = PurePath::new("/srv/www/../data/.config.tar.gz");
//! assert_eq!(path.as_str(), "/srv/data/.config.tar.gz");
//! assert_eq!(path.stem(), ".config.tar");
//! assert_eq!(path.suffixes(), vec![".tar", ".gz"]);
//!
//! let renamed = path.with_suffixes(&[".zip"]).unwrap();
//! assert_eq!(renamed.as_str(), "/srv/data/.config.zip");
//!
//! let rel = renamed.relative_to(&PurePath::new("/srv")).unwrap();
//! assert_eq!(rel.as_str(), "data/.config.zip");
//! assert_eq!(path.as_uri(), "file:///srv/data/.config.tar.gz");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter, PathReport};
pub use path::{PathRelationship, PathSyntax, Posix, PurePath, RelativeMode};
