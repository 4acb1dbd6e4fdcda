//! Config field paths.

use owo_colors::OwoColorize;
use std::fmt;

/// Location of a value inside the declaration.
///
/// Paths are built while walking the declaration, so they carry indices and
/// map keys that only exist at runtime.
///
/// # Example
///
/// ```ignore
/// let path = FieldPath::new("themeConfig").key("nav").index(1).key("items").index(3);
/// assert_eq!(path.as_str(), "themeConfig.nav[1].items[3]");
///
/// let path = FieldPath::new("themeConfig").key("sidebar").entry("/tools/");
/// assert_eq!(path.as_str(), "themeConfig.sidebar[\"/tools/\"]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }

    /// Append a struct field (`a.b`).
    pub fn key(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    /// Append a sequence index (`a[0]`).
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{i}]", self.0))
    }

    /// Append a map key (`a["key"]`).
    pub fn entry(&self, key: &str) -> Self {
        Self(format!("{}[{key:?}]", self.0))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
