//! Lexical path resolution.
//!
//! This resolves `.` and `..` components by looking only at the string. The
//! filesystem is never consulted, so the result may not exist, and a symlink
//! followed by `..` is collapsed as text rather than by following the link.
//! That also makes it the right tool for talking about where a link *is*
//! rather than where it points.

use crate::path::join::normalize_separators;
use crate::path::separator::Separator;

/// Naively resolve `.` and `..` in `path`.
///
/// Both `/` and `\` are accepted as separators on input; the output uses
/// `sep`. Empty segments and `.` are dropped, and each `..` removes the
/// previously kept segment. A `..` with nothing left to remove is ignored,
/// so a relative path can never climb above its start.
///
/// The result is prefixed with `sep` when `absolute` is set or when `path`
/// itself starts with a separator.
///
/// # Examples
///
/// ```
/// use pathwise::path::resolve::resolve;
/// use pathwise::Separator;
///
/// assert_eq!(resolve("a/b/../c", false, Separator::Slash), "a/c");
/// assert_eq!(resolve("/a/./b/../c", false, Separator::Slash), "/a/c");
/// assert_eq!(resolve("star/trek", true, Separator::Slash), "/star/trek");
/// assert_eq!(resolve("../../a", false, Separator::Slash), "a");
/// ```
#[must_use]
pub fn resolve(path: &str, absolute: bool, sep: Separator) -> String {
    let normalized = normalize_separators(path, sep);
    let absolute = absolute || normalized.starts_with(sep.as_char());

    let mut kept: Vec<&str> = Vec::new();
    for part in normalized.split(sep.as_char()).filter(|p| !p.is_empty()) {
        match part {
            "." => {}
            ".." => {
                kept.pop();
            }
            _ => kept.push(part),
        }
    }

    let joined = kept.join(sep.as_str());
    log::trace!("resolved {path:?} to {joined:?} (absolute: {absolute})");

    if absolute {
        format!("{sep}{joined}")
    } else {
        joined
    }
}
