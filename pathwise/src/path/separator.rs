//! Directory separator selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The character placed between path segments.
///
/// Input is always accepted with either `/` or `\`; the separator only
/// decides what the output looks like.
///
/// # Examples
///
/// ```
/// use pathwise::Separator;
///
/// assert_eq!(Separator::Slash.as_char(), '/');
/// assert_eq!(Separator::Backslash.as_char(), '\\');
/// assert_eq!("windows".parse::<Separator>().unwrap(), Separator::Backslash);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Separator {
    /// Forward slash, `/`.
    Slash,
    /// Backslash, `\`.
    Backslash,
}

impl Separator {
    /// The separator used by the host platform.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Backslash
        } else {
            Self::Slash
        }
    }

    /// The separator as a `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Slash => '/',
            Self::Backslash => '\\',
        }
    }

    /// The separator as a one-character `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slash => "/",
            Self::Backslash => "\\",
        }
    }

    /// Whether `c` is one of the characters accepted as a separator on input.
    #[must_use]
    pub const fn is_any(c: char) -> bool {
        c == '/' || c == '\\'
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Separator {
    type Err = String;

    /// Parses `slash`, `backslash`, `unix`, `windows`, `native`, `/` or `\`
    /// (names are case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slash" | "unix" | "/" => Ok(Self::Slash),
            "backslash" | "windows" | "\\" => Ok(Self::Backslash),
            "native" => Ok(Self::native()),
            _ => Err(format!("unknown separator '{s}'")),
        }
    }
}

impl TryFrom<String> for Separator {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Separator> for String {
    fn from(sep: Separator) -> Self {
        match sep {
            Separator::Slash => "slash".to_string(),
            Separator::Backslash => "backslash".to_string(),
        }
    }
}
