//! Path segment joining.
//!
//! Joining is purely string manipulation: segments are glued together with a
//! separator and doubled separators are squeezed out. Nothing here checks
//! that the result names a real (or even a valid) path.

use crate::path::separator::Separator;

/// Join path segments with a separator.
///
/// - No segments yields `None`.
/// - A single segment is returned unchanged.
/// - Otherwise each segment is trimmed of surrounding whitespace, the
///   segments are joined with `sep`, and every run of two or more `/` (or two
///   or more `\`) is collapsed into a single `sep`.
///
/// # Examples
///
/// ```
/// use pathwise::path::join::slash;
/// use pathwise::Separator;
///
/// let joined = slash(["star/trek/", "/enterprise"], Separator::Slash);
/// assert_eq!(joined.as_deref(), Some("star/trek/enterprise"));
///
/// assert_eq!(slash(["only"], Separator::Slash).as_deref(), Some("only"));
/// assert_eq!(slash(Vec::<&str>::new(), Separator::Slash), None);
/// ```
pub fn slash<I, S>(segments: I, sep: Separator) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut iter = segments.into_iter();
    let first = iter.next()?;

    let Some(second) = iter.next() else {
        return Some(first.as_ref().to_string());
    };

    let mut compiled = first.as_ref().trim().to_string();
    for segment in std::iter::once(second).chain(iter) {
        compiled.push(sep.as_char());
        compiled.push_str(segment.as_ref().trim());
    }

    Some(collapse_separator_runs(&compiled, sep))
}

/// Replace every `/` and `\` in `path` with `sep`.
///
/// # Examples
///
/// ```
/// use pathwise::path::join::normalize_separators;
/// use pathwise::Separator;
///
/// assert_eq!(normalize_separators("a\\b/c", Separator::Slash), "a/b/c");
/// assert_eq!(normalize_separators("a/b", Separator::Backslash), "a\\b");
/// ```
#[must_use]
pub fn normalize_separators(path: &str, sep: Separator) -> String {
    path.chars()
        .map(|c| if Separator::is_any(c) { sep.as_char() } else { c })
        .collect()
}

/// Collapse runs of a repeated separator character into one `sep`.
///
/// Only runs of the *same* character count: `//` and `\\` collapse, but a
/// mixed `/\` pair is left alone.
fn collapse_separator_runs(path: &str, sep: Separator) -> String {
    let mut out = String::with_capacity(path.len());
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        if Separator::is_any(c) && chars.peek() == Some(&c) {
            while chars.peek() == Some(&c) {
                chars.next();
            }
            out.push(sep.as_char());
        } else {
            out.push(c);
        }
    }

    out
}
