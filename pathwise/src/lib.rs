#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathwise
//!
//! String-level path utilities: joining segments, resolving `.` and `..`
//! without touching the disk, canonicalizing against the disk, checking
//! whether one path is beneath another, and deleting directory trees.
//!
//! ## Core Types
//!
//! - [`PathOps`]: every operation, bound to an output [`Separator`]
//! - [`Containment`]: how much normalization a containment check applies
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathwise::{PathOps, Separator};
//!
//! let ops = PathOps::new().with_separator(Separator::Slash);
//!
//! // Join segments, squeezing out doubled separators
//! assert_eq!(ops.slash(["star/trek/", "/enterprise"]).as_deref(), Some("star/trek/enterprise"));
//!
//! // Resolve `.` and `..` lexically
//! assert_eq!(ops.resolve("a/b/../c", false), "a/c");
//!
//! // Containment is a plain prefix test
//! assert!(ops.is_beneath("/a/b/c", "/a/b"));
//! assert!(ops.is_beneath("/a/bc", "/a/b"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod remove;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Containment, PathOps, Separator};
pub use remove::recursive_remove;
