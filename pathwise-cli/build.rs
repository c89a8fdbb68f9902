//! Build script for pathwise-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here a second time.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("pathwise")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Join, resolve and compare path strings")
        .long_about(
            "Command-line tool for joining path segments, resolving dot segments, \
             canonicalizing paths, checking containment and removing directory trees",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .help("Separator used in output paths (slash, backslash or native)")
                .value_name("SEP")
                .global(true)
                .env("PATHWISE_SEPARATOR"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load an additional configuration file")
                .value_name("FILE")
                .global(true)
                .env("PATHWISE_CONFIG"),
        )
        .subcommands(vec![
            Command::new("slash")
                .about("Join path segments")
                .long_about("Join segments with one separator, collapsing repeated separators"),
            Command::new("resolve")
                .about("Resolve dot segments lexically")
                .long_about("Resolve '.' and '..' segments without touching the filesystem"),
            Command::new("resolve-real")
                .about("Canonicalize an existing path")
                .long_about("Resolve a path against the filesystem, following symlinks"),
            Command::new("is-beneath")
                .about("Assert that one path lies beneath another")
                .long_about("Check path containment and exit with an appropriate status code"),
            Command::new("remove")
                .about("Recursively remove a directory")
                .long_about("Delete a directory tree depth-first, optionally keeping the root"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathwise.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
