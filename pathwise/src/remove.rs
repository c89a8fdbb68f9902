//! Recursive directory removal.
//!
//! Use with care: this deletes everything under the given directory.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Delete everything inside `dir`, and `dir` itself when `complete` is set.
///
/// The tree is walked depth-first and entries are removed children first, so
/// each directory is empty by the time it is removed. Symlinks found inside
/// the tree are unlinked, never followed, which keeps the walk inside `dir`.
/// `dir` itself must be a real directory: a symlink is rejected before
/// anything is deleted.
///
/// There is no rollback. If an entry cannot be removed, the error is returned
/// immediately and whatever was already deleted stays deleted.
///
/// # Errors
///
/// Returns an error if:
/// - `dir` does not exist (`PathNotFound`)
/// - `dir` is a symlink or not a directory (`InvalidPath`)
/// - Permission is denied for some entry (`PermissionDenied`)
/// - Any other I/O error occurs (`Io`)
///
/// # Examples
///
/// ```
/// use pathwise::remove::recursive_remove;
/// use std::fs;
///
/// let dir = tempfile::tempdir().unwrap();
/// let scratch = dir.path().join("scratch");
/// fs::create_dir_all(scratch.join("nested")).unwrap();
/// fs::write(scratch.join("nested").join("file.txt"), "x").unwrap();
///
/// // Empty the directory but keep it
/// recursive_remove(&scratch, false).unwrap();
/// assert!(scratch.exists());
/// assert_eq!(fs::read_dir(&scratch).unwrap().count(), 0);
///
/// // Remove it entirely
/// recursive_remove(&scratch, true).unwrap();
/// assert!(!scratch.exists());
/// ```
pub fn recursive_remove(dir: impl AsRef<Path>, complete: bool) -> Result<()> {
    let dir = dir.as_ref();
    let metadata = fs::symlink_metadata(dir).map_err(|e| Error::from_io(e, dir))?;
    if metadata.file_type().is_symlink() {
        return Err(Error::InvalidPath {
            path: dir.to_path_buf(),
            reason: "refusing to remove through a symlink".to_string(),
        });
    }
    if !metadata.is_dir() {
        return Err(Error::InvalidPath {
            path: dir.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    remove_contents(dir)?;

    if complete {
        fs::remove_dir(dir).map_err(|e| Error::from_io(e, dir))?;
        log::debug!("removed directory {}", dir.display());
    }

    Ok(())
}

/// Remove every entry below `dir`, leaving `dir` itself in place.
fn remove_contents(dir: &Path) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::from_io(e, dir))?;

    for entry in entries {
        let entry = entry.map_err(|e| Error::from_io(e, dir))?;
        let path = entry.path();
        // DirEntry::file_type does not follow symlinks.
        let file_type = entry.file_type().map_err(|e| Error::from_io(e, &path))?;

        if file_type.is_dir() {
            remove_contents(&path)?;
            fs::remove_dir(&path).map_err(|e| Error::from_io(e, &path))?;
            log::debug!("removed directory {}", path.display());
        } else {
            remove_entry(&path)?;
            log::debug!("removed {}", path.display());
        }
    }

    Ok(())
}

/// Unlink a non-directory entry.
///
/// On Windows a symlink to a directory is itself a directory entry and has
/// to go through `remove_dir`.
fn remove_entry(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        #[cfg(windows)]
        Err(_) if path.is_symlink() => fs::remove_dir(path).map_err(|e| Error::from_io(e, path)),
        Err(e) => Err(Error::from_io(e, path)),
    }
}
