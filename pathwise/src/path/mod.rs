//! Path string handling.
//!
//! Paths are treated as plain strings throughout. Nothing here validates a
//! path, and only the `*_real` operations look at the filesystem.
//!
//! # Key Concepts
//!
//! ## Joining
//!
//! [`join::slash`] glues segments together with a separator and squeezes out
//! doubled separators at the seams.
//!
//! ## Lexical resolution
//!
//! [`resolve::resolve`] removes `.` and `..` components from the string. It
//! never touches the disk, so the result may not exist.
//!
//! ## Canonical resolution
//!
//! [`canonicalize::resolve_real`] resolves lexically and then asks the
//! operating system for the real, symlink-free location. Missing paths give
//! `None`.
//!
//! ## Containment
//!
//! The [`containment`] checks report whether one path is beneath another by
//! comparing string prefixes, after [`Containment::Verbatim`],
//! [`Containment::Lexical`] or [`Containment::Real`] normalization.
//!
//! ## Separators
//!
//! Both `/` and `\` are accepted on input. Output uses a [`Separator`], which
//! defaults to the host platform's and can be overridden through
//! [`PathOps`] or configuration.
//!
//! # Examples
//!
//! ```
//! use pathwise::path::{PathOps, Separator};
//!
//! let ops = PathOps::new().with_separator(Separator::Slash);
//!
//! assert_eq!(ops.resolve("/a/b/../c", false), "/a/c");
//! assert!(ops.is_beneath("/a/b/c", "/a/b"));
//! ```

pub mod canonicalize;
pub mod containment;
pub mod join;
pub mod ops;
pub mod resolve;
mod separator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use containment::Containment;
pub use ops::PathOps;
pub use separator::Separator;
