//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, IsBeneathCommand, RemoveCommand, ResolveCommand, ResolveRealCommand,
    SlashCommand,
};
use clap::{Parser, Subcommand};
use pathwise::Separator;
use std::path::PathBuf;

/// Command-line tool for joining, resolving and comparing path strings.
#[derive(Parser)]
#[command(name = "pathwise")]
#[command(version, about = "Join, resolve and compare path strings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Separator used in output paths (slash, backslash or native)
    #[arg(long, value_name = "SEP", global = true, env = "PATHWISE_SEPARATOR")]
    pub separator: Option<Separator>,

    /// Load an additional configuration file
    #[arg(long, value_name = "FILE", global = true, env = "PATHWISE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Join path segments
    Slash(SlashCommand),

    /// Resolve dot segments lexically
    Resolve(ResolveCommand),

    /// Canonicalize an existing path
    ResolveReal(ResolveRealCommand),

    /// Assert that one path lies beneath another
    IsBeneath(IsBeneathCommand),

    /// Recursively remove a directory
    Remove(RemoveCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
