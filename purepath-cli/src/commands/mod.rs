//! CLI command implementations.
//!
//! Each command maps onto one `PurePath` operation:
//! - `inspect`: Show every derived attribute of one or more paths
//! - `join`: Append segments to a base path
//! - `parent`: Print the parent of a path
//! - `with_name`: Replace the final component
//! - `with_stem`: Replace the stem, keeping the last suffix
//! - `with_suffix`: Replace the last suffix
//! - `with_suffixes`: Replace the whole suffix chain
//! - `relative_to`: Express a path relative to another
//! - `uri`: Print the `file://` URI of a path
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod inspect;
pub mod join;
pub mod parent;
pub mod relative_to;
pub mod uri;
pub mod with_name;
pub mod with_stem;
pub mod with_suffix;
pub mod with_suffixes;

pub use completions::CompletionsCommand;
pub use inspect::InspectCommand;
pub use join::JoinCommand;
pub use parent::ParentCommand;
pub use relative_to::RelativeToCommand;
pub use uri::UriCommand;
pub use with_name::WithNameCommand;
pub use with_stem::WithStemCommand;
pub use with_suffix::WithSuffixCommand;
pub use with_suffixes::WithSuffixesCommand;
