//! Parent/child containment checks.
//!
//! All three checks end in the same plain string comparison: the child is
//! beneath the parent when it starts with the parent's text. They differ
//! only in how much normalization happens first.
//!
//! The comparison is *not* segment-aware. `/a/bc` counts as beneath `/a/b`
//! because the text `/a/b` is a prefix of `/a/bc`. Append a trailing
//! separator to the parent if sibling prefixes must be excluded.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::path::canonicalize::resolve_real;
use crate::path::resolve::resolve;
use crate::path::separator::Separator;

/// How much normalization to apply before comparing two paths.
///
/// # Examples
///
/// ```
/// use pathwise::{Containment, Separator};
///
/// let sep = Separator::Slash;
/// assert!(!Containment::Verbatim.check("a/b/c", "a/x/../b", None, None, sep));
/// assert!(Containment::Lexical.check("a/b/c", "a/x/../b", None, None, sep));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Containment {
    /// Compare the strings exactly as given.
    Verbatim,
    /// Resolve `.` and `..` lexically first.
    #[default]
    Lexical,
    /// Canonicalize both paths on disk first; missing paths never match.
    Real,
}

impl Containment {
    /// Run the check selected by `self`.
    ///
    /// `child_dir` and `parent_dir` are base directories for relative paths
    /// and only apply to [`Containment::Real`]. `sep` only matters for
    /// [`Containment::Lexical`].
    #[must_use]
    pub fn check(
        self,
        child: &str,
        parent: &str,
        child_dir: Option<&str>,
        parent_dir: Option<&str>,
        sep: Separator,
    ) -> bool {
        match self {
            Self::Verbatim => is_beneath(child, parent),
            Self::Lexical => is_beneath_resolve(child, parent, sep),
            Self::Real => is_beneath_real(child, parent, child_dir, parent_dir),
        }
    }
}

impl fmt::Display for Containment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verbatim => write!(f, "verbatim"),
            Self::Lexical => write!(f, "lexical"),
            Self::Real => write!(f, "real"),
        }
    }
}

impl FromStr for Containment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbatim" => Ok(Self::Verbatim),
            "lexical" => Ok(Self::Lexical),
            "real" => Ok(Self::Real),
            _ => Err(format!("invalid containment mode: {s}")),
        }
    }
}

/// Check whether `child` is beneath `parent` by string prefix.
///
/// No normalization or filesystem access takes place. Equal strings count as
/// beneath each other.
///
/// # Examples
///
/// ```
/// use pathwise::path::containment::is_beneath;
///
/// assert!(is_beneath("/a/b/c", "/a/b"));
/// assert!(is_beneath("/a/bc", "/a/b"));
/// assert!(!is_beneath("/a", "/a/b"));
/// ```
#[must_use]
pub fn is_beneath(child: &str, parent: &str) -> bool {
    child.len() >= parent.len() && child.starts_with(parent)
}

/// Check containment after lexically resolving both paths.
///
/// # Examples
///
/// ```
/// use pathwise::path::containment::is_beneath_resolve;
/// use pathwise::Separator;
///
/// assert!(is_beneath_resolve(
///     "star/trek/enterprise",
///     "star/wars/../trek",
///     Separator::Slash,
/// ));
/// ```
#[must_use]
pub fn is_beneath_resolve(child: &str, parent: &str, sep: Separator) -> bool {
    is_beneath(&resolve(child, false, sep), &resolve(parent, false, sep))
}

/// Check containment after canonicalizing both paths on disk.
///
/// Each path may be given relative to its own base directory. If either
/// path does not exist the answer is `false`, so a `true` result means both
/// paths really are there.
///
/// Both sides come back from the OS in native form, so no separator is
/// involved.
///
/// # Examples
///
/// ```no_run
/// use pathwise::path::containment::is_beneath_real;
///
/// assert!(is_beneath_real("bin", "/usr", Some("/usr"), None));
/// ```
#[must_use]
pub fn is_beneath_real(
    child: &str,
    parent: &str,
    child_dir: Option<&str>,
    parent_dir: Option<&str>,
) -> bool {
    match (
        resolve_real(child, child_dir),
        resolve_real(parent, parent_dir),
    ) {
        (Some(real_child), Some(real_parent)) => is_beneath(&real_child, &real_parent),
        _ => false,
    }
}
