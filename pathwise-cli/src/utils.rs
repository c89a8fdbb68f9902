//! Utility functions for CLI operations.
//!
//! Configuration loading and construction of the [`PathOps`] facade shared
//! by every command.

use crate::error::CliError;
use pathwise::config::{Config, ConfigBuilder};
use pathwise::{PathOps, Separator};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the output separator.
    pub separator: Option<Separator>,

    /// Additional configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. Project and user configuration files
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref file) = global.config {
        builder = builder.with_config_file(file);
    }

    if global.separator.is_some() {
        builder = builder.with_config(Config {
            separator: global.separator,
            ..Default::default()
        });
    }

    let config = builder.build().map_err(|e| CliError::Config(e.to_string()))?;
    log::debug!("effective configuration: {config:?}");
    Ok(config)
}

/// Load configuration and build the path operations it describes.
pub fn path_ops(global: &GlobalOptions) -> Result<(PathOps, Config), CliError> {
    let config = load_configuration(global)?;
    Ok((PathOps::from_config(&config), config))
}
