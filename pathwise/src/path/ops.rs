//! Configured entry point for the path operations.
//!
//! This module provides the `PathOps` type, which carries the output
//! separator so that callers pick it once instead of passing it to every
//! call.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::path::containment::{self, Containment};
use crate::path::separator::Separator;
use crate::path::{canonicalize, join, resolve};
use crate::remove;

/// Path operations bound to a separator.
///
/// # Examples
///
/// ```
/// use pathwise::{PathOps, Separator};
///
/// let ops = PathOps::new().with_separator(Separator::Slash);
///
/// assert_eq!(ops.slash(["star/trek/", "/enterprise"]).as_deref(), Some("star/trek/enterprise"));
/// assert_eq!(ops.resolve("star/wars/../trek", false), "star/trek");
/// assert!(ops.is_beneath_resolve("star/trek/enterprise", "star/wars/../trek"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathOps {
    separator: Separator,
}

impl PathOps {
    /// Create path operations using the host platform's separator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build path operations from a loaded configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::{Config, PathOps, Separator};
    ///
    /// let config = Config { separator: Some(Separator::Backslash), ..Default::default() };
    /// assert_eq!(PathOps::from_config(&config).separator(), Separator::Backslash);
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            separator: config.separator.unwrap_or_default(),
        }
    }

    /// Use `separator` for all output.
    #[must_use]
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    /// The separator in use.
    #[must_use]
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Join segments; see [`join::slash`].
    pub fn slash<I, S>(&self, segments: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        join::slash(segments, self.separator)
    }

    /// Rewrite every separator; see [`join::normalize_separators`].
    #[must_use]
    pub fn normalize_separators(&self, path: &str) -> String {
        join::normalize_separators(path, self.separator)
    }

    /// Lexically resolve `.` and `..`; see [`resolve::resolve`].
    #[must_use]
    pub fn resolve(&self, path: &str, absolute: bool) -> String {
        resolve::resolve(path, absolute, self.separator)
    }

    /// Canonicalize on disk; see [`canonicalize::resolve_real`].
    ///
    /// The result is in the host's native form whatever [`Self::separator`]
    /// is.
    #[must_use]
    pub fn resolve_real(&self, path: &str, working_dir: Option<&str>) -> Option<String> {
        canonicalize::resolve_real(path, working_dir)
    }

    /// Canonicalize on disk, keeping the error; see
    /// [`canonicalize::try_resolve_real`].
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or cannot be read.
    pub fn try_resolve_real(&self, path: &str, working_dir: Option<&str>) -> Result<String> {
        canonicalize::try_resolve_real(path, working_dir)
    }

    /// Verbatim prefix check; see [`containment::is_beneath`].
    #[must_use]
    pub fn is_beneath(&self, child: &str, parent: &str) -> bool {
        containment::is_beneath(child, parent)
    }

    /// Prefix check after lexical resolution; see
    /// [`containment::is_beneath_resolve`].
    #[must_use]
    pub fn is_beneath_resolve(&self, child: &str, parent: &str) -> bool {
        containment::is_beneath_resolve(child, parent, self.separator)
    }

    /// Prefix check after canonicalization; see
    /// [`containment::is_beneath_real`].
    #[must_use]
    pub fn is_beneath_real(
        &self,
        child: &str,
        parent: &str,
        child_dir: Option<&str>,
        parent_dir: Option<&str>,
    ) -> bool {
        containment::is_beneath_real(child, parent, child_dir, parent_dir)
    }

    /// Containment check at the level chosen by `mode`.
    #[must_use]
    pub fn contains(
        &self,
        mode: Containment,
        child: &str,
        parent: &str,
        child_dir: Option<&str>,
        parent_dir: Option<&str>,
    ) -> bool {
        mode.check(child, parent, child_dir, parent_dir, self.separator)
    }

    /// Delete a directory tree; see [`remove::recursive_remove`].
    ///
    /// # Errors
    ///
    /// Returns an error if any entry cannot be removed.
    pub fn recursive_remove(&self, dir: impl AsRef<Path>, complete: bool) -> Result<()> {
        remove::recursive_remove(dir, complete)
    }
}
