//! Canonical (on-disk) path resolution.
//!
//! A path is first resolved lexically, optionally against a base directory,
//! and then handed to the operating system, which confirms it exists and
//! expands any symlinks along the way. `dunce` does the OS call so that
//! Windows results come back without the `\\?\` verbatim prefix.
//!
//! The string handed to the OS is always built with the host separator, and
//! the OS answers in native form. A configured output separator therefore
//! plays no part here.

use std::path::Path;

use crate::error::{Error, Result};
use crate::path::join::slash;
use crate::path::resolve::resolve;
use crate::path::separator::Separator;

/// Resolve `path` to its canonical on-disk location.
///
/// Without a `working_dir`, `path` is resolved on its own (a relative path is
/// then interpreted against the process's current directory by the OS). With
/// a `working_dir`, the two are joined with [`slash`] first.
///
/// The returned path is always absolute. Returns `None` when the path does
/// not exist or cannot be canonicalized; use [`try_resolve_real`] to find out
/// why.
///
/// # Examples
///
/// ```no_run
/// use pathwise::path::canonicalize::resolve_real;
///
/// let real = resolve_real("lib/../bin", Some("/usr"));
/// assert!(real.is_some());
///
/// assert_eq!(resolve_real("/no/such/place", None), None);
/// ```
#[must_use]
pub fn resolve_real(path: &str, working_dir: Option<&str>) -> Option<String> {
    try_resolve_real(path, working_dir).ok()
}

/// Resolve `path` to its canonical on-disk location, keeping the error.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - The canonical path is not valid UTF-8 (`InvalidPath`)
/// - Any other I/O error occurs (`Io`)
///
/// # Examples
///
/// ```no_run
/// use pathwise::path::canonicalize::try_resolve_real;
///
/// let err = try_resolve_real("/no/such/place", None).unwrap_err();
/// assert!(err.is_not_found());
/// ```
pub fn try_resolve_real(path: &str, working_dir: Option<&str>) -> Result<String> {
    let sep = Separator::native();
    let lexical = match working_dir {
        Some(dir) => {
            // slash() only returns None for zero segments.
            let joined = slash([dir, path], sep).unwrap_or_default();
            resolve(&joined, false, sep)
        }
        None => resolve(path, false, sep),
    };

    let lexical_path = Path::new(&lexical);
    let canonical = dunce::canonicalize(lexical_path).map_err(|e| {
        log::debug!("cannot canonicalize {lexical:?}: {e}");
        Error::from_io(e, lexical_path)
    })?;

    canonical
        .into_os_string()
        .into_string()
        .map_err(|raw| Error::InvalidPath {
            path: raw.into(),
            reason: "Canonical path contains invalid UTF-8".to_string(),
        })
}
