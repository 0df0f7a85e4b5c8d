//! Build script for purepath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("purepath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and edit path strings without touching disk")
        .long_about(
            "Command-line tool for inspecting, joining, renaming and re-suffixing \
             paths as plain strings, without consulting the filesystem",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file to load on top of any discovered purepath.yaml")
                .value_name("FILE")
                .global(true)
                .env("PUREPATH_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (text or json)")
                .value_name("FORMAT")
                .global(true),
        )
        .subcommands(vec![
            Command::new("inspect")
                .about("Show every derived attribute of one or more paths")
                .long_about("Print root, parts, parent, name, stem, suffixes and URI of each path"),
            Command::new("join")
                .about("Append segments to a base path")
                .long_about("Append segments to a base path and normalize the result"),
            Command::new("parent")
                .about("Print the parent of a path")
                .long_about("Print the path without its final component"),
            Command::new("with-name")
                .about("Replace the final component of a path")
                .long_about("Replace the final component; fails for root paths"),
            Command::new("with-stem")
                .about("Replace the stem of a path, keeping its last suffix")
                .long_about("Replace the final component without its last suffix"),
            Command::new("with-suffix")
                .about("Replace the last suffix of a path")
                .long_about("Replace the last suffix; an empty suffix removes it"),
            Command::new("with-suffixes")
                .about("Replace the whole suffix chain of a path")
                .long_about("Replace every suffix of the final component, in order"),
            Command::new("relative-to")
                .about("Express a path relative to another")
                .long_about("Strip an ancestor path, comparing segments or raw strings"),
            Command::new("uri")
                .about("Print the file:// URI of a path")
                .long_about("Print the path prefixed with file://"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("purepath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
