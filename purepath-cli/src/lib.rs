//! Library exports for purepath-cli.
//!
//! This module exports the CLI structure so the binary and the integration
//! tests share one definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for the binary
pub use cli::Cli;
