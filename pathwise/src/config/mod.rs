//! Configuration system for pathwise.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project `pathwise.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHWISE_*`)
//! 3. An explicit file (via `ConfigBuilder::with_config_file`)
//! 4. Project config (nearest `pathwise.yaml`)
//! 5. User config (`~/.pathwise/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use pathwise::config::ConfigBuilder;
//! use pathwise::PathOps;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let ops = PathOps::from_config(&config);
//! println!("separator: {}", ops.separator());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
