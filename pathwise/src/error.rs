//! Error types for the pathwise library.
//!
//! Most path operations are plain string manipulation and cannot fail. The
//! ones that touch the filesystem or read configuration report failures
//! through [`Error`], built with `thiserror`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a pathwise error.
///
/// # Examples
///
/// ```
/// use pathwise::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/srv/data".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathwise library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided or produced.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field (or environment variable) that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Map an I/O error on `path` to the most specific variant.
    ///
    /// `NotFound` and `PermissionDenied` keep the offending path; every other
    /// kind is wrapped as [`Error::Io`].
    pub(crate) fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathwise::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/path"),
            reason: "not valid UTF-8".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/path"));
        assert!(display.contains("not valid UTF-8"));
    }

    #[test]
    fn test_path_not_found_error() {
        let err = Error::PathNotFound {
            path: PathBuf::from("/missing"),
        };
        assert!(format!("{err}").contains("path not found"));
        assert!(err.is_not_found());
        assert!(!err.is_permission_denied());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "PATHWISE_SEPARATOR".to_string(),
            message: "unknown separator 'pipe'".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("PATHWISE_SEPARATOR"));
        assert!(display.contains("pipe"));
    }

    #[test]
    fn test_from_io_not_found() {
        let io_err = std::io::Error::new(ErrorKind::NotFound, "gone");
        let err = Error::from_io(io_err, Path::new("/gone"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_permission_denied() {
        let io_err = std::io::Error::new(ErrorKind::PermissionDenied, "nope");
        let err = Error::from_io(io_err, Path::new("/root/secret"));
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_from_io_other_kind_is_wrapped() {
        let io_err = std::io::Error::new(ErrorKind::Other, "disk on fire");
        let err = Error::from_io(io_err, Path::new("/tmp"));
        assert!(matches!(err, Error::Io(_)));
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(format!("{err}").contains("configuration error"));
    }
}
