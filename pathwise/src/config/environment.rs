//! Environment variable handling for configuration overrides.
//!
//! `PATHWISE_*` variables override values from configuration files.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::{Containment, Separator};
use std::env;

/// Environment variable selecting the output separator.
pub const ENV_SEPARATOR: &str = "PATHWISE_SEPARATOR";
/// Environment variable forcing absolute resolution.
pub const ENV_ABSOLUTE: &str = "PATHWISE_ABSOLUTE";
/// Environment variable selecting the containment level.
pub const ENV_CONTAINMENT: &str = "PATHWISE_CONTAINMENT";
/// Environment variable controlling removal of the root directory.
pub const ENV_REMOVE_ROOT: &str = "PATHWISE_REMOVE_ROOT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathwise::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(ENV_SEPARATOR) {
            config.separator = Some(val.parse::<Separator>().map_err(|message| Error::Validation {
                field: ENV_SEPARATOR.into(),
                message,
            })?);
        }

        if let Ok(val) = env::var(ENV_ABSOLUTE) {
            config.absolute = Some(Self::parse_bool(ENV_ABSOLUTE, &val)?);
        }

        if let Ok(val) = env::var(ENV_CONTAINMENT) {
            config.containment = Some(val.parse::<Containment>().map_err(|message| Error::Validation {
                field: ENV_CONTAINMENT.into(),
                message,
            })?);
        }

        if let Ok(val) = env::var(ENV_REMOVE_ROOT) {
            config.remove_root = Some(Self::parse_bool(ENV_REMOVE_ROOT, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean from an environment variable value.
    ///
    /// Accepts `true`/`false`, `1`/`0` and `yes`/`no`, case-insensitively.
    fn parse_bool(name: &str, value: &str) -> Result<bool> {
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(Error::Validation {
                field: name.into(),
                message: format!("Invalid boolean value: {value}"),
            }),
        }
    }
}
