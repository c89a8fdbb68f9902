//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathwise::config::{Config, ConfigMerger};
///
/// let low = Config { absolute: Some(false), ..Default::default() };
/// let high = Config { absolute: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.absolute, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target where set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.separator.is_some() {
            target.separator = source.separator;
        }

        if source.absolute.is_some() {
            target.absolute = source.absolute;
        }

        if source.containment.is_some() {
            target.containment = source.containment;
        }

        if source.remove_root.is_some() {
            target.remove_root = source.remove_root;
        }
    }
}
