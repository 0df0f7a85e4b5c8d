//! Configuration for purepath tools.
//!
//! The path type itself needs no configuration. These settings choose how
//! the command-line front end compares paths and renders reports.
//!
//! Configuration is merged from several sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PUREPATH_RELATIVE_MODE`, `PUREPATH_FORMAT`)
//! 3. An explicit file (via `ConfigBuilder::with_config_file`)
//! 4. The nearest `purepath.yaml` above the working directory
//! 5. Built-in defaults
//!
//! ```yaml
//! relative_mode: segments   # or string-prefix
//! format: text              # or json
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, FORMAT_ENV, RELATIVE_MODE_ENV};
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::Config;
