//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::path::{Containment, Separator};

/// Complete configuration structure.
///
/// Every field is optional so that several sources can be layered; unset
/// fields fall back to the defaults described on each accessor.
///
/// # Examples
///
/// ```
/// use pathwise::config::Config;
/// use pathwise::Separator;
///
/// let config: Config = serde_yaml::from_str("separator: backslash\nabsolute: true\n").unwrap();
/// assert_eq!(config.separator, Some(Separator::Backslash));
/// assert!(config.absolute());
/// assert!(config.remove_root());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Separator used in output paths.
    pub separator: Option<Separator>,

    /// Whether lexical resolution prefixes a separator by default.
    pub absolute: Option<bool>,

    /// Default normalization level for containment checks.
    pub containment: Option<Containment>,

    /// Whether recursive removal also deletes the root directory.
    pub remove_root: Option<bool>,
}

impl Config {
    /// The configured separator, or the host platform's.
    #[must_use]
    pub fn separator(&self) -> Separator {
        self.separator.unwrap_or_default()
    }

    /// Whether resolution forces an absolute result (default `false`).
    #[must_use]
    pub fn absolute(&self) -> bool {
        self.absolute.unwrap_or(false)
    }

    /// The containment level (default [`Containment::Lexical`]).
    #[must_use]
    pub fn containment(&self) -> Containment {
        self.containment.unwrap_or_default()
    }

    /// Whether removal deletes the root directory too (default `true`).
    #[must_use]
    pub fn remove_root(&self) -> bool {
        self.remove_root.unwrap_or(true)
    }
}
