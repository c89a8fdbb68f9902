//! Library exports for pathwise-cli.
//!
//! This module exports the CLI structure so integration tests and benches
//! can drive command parsing without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
