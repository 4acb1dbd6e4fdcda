//! Top-level site metadata.
//!
//! # Example
//!
//! ```toml
//! lang = "zh-CN"
//! title = "Frontend Notes"
//! description = "Notes on tools, runtimes and frameworks"
//! srcDir = "docs"
//! lastUpdated = true
//! ```

use std::path::{Component, Path, PathBuf};

use crate::config::{Declaration, Diagnostics, FieldPath};

/// Validated site metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMeta {
    /// Locale tag (e.g., "en", "zh-CN").
    pub lang: String,
    pub title: String,
    pub description: String,
    /// Content directory, relative to the project root.
    pub src_dir: PathBuf,
    /// Show "last updated" timestamps on pages.
    pub last_updated: bool,
}

impl SiteMeta {
    pub const DEFAULT_SRC_DIR: &'static str = ".";

    /// Validate the top-level keys of a declaration.
    ///
    /// # Checks
    /// - `lang` and `title` are required
    /// - `lang` looks like a locale tag
    /// - `srcDir` is relative and stays inside the project
    /// - `srcDir` exists when the project `root` is known
    pub fn resolve(decl: &Declaration, root: Option<&Path>, diag: &mut Diagnostics) -> Self {
        let lang = match decl.lang.as_deref() {
            None => {
                diag.error_with_hint(
                    FieldPath::new("lang"),
                    "required field is missing",
                    "set a locale tag, e.g.: lang = \"en-US\"",
                );
                String::new()
            }
            Some(lang) => {
                if !is_locale_tag(lang) {
                    diag.error_with_hint(
                        FieldPath::new("lang"),
                        format!("`{lang}` is not a locale tag"),
                        "use a tag like \"en\", \"en-US\" or \"zh-CN\"",
                    );
                }
                lang.to_string()
            }
        };

        let title = match decl.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title.to_string(),
            Some(_) => {
                diag.error(FieldPath::new("title"), "title must not be empty");
                String::new()
            }
            None => {
                diag.error(FieldPath::new("title"), "required field is missing");
                String::new()
            }
        };

        let src_dir = decl
            .src_dir
            .clone()
            .unwrap_or_else(|| Self::DEFAULT_SRC_DIR.to_string());
        validate_src_dir(&src_dir, root, diag);

        Self {
            lang,
            title,
            description: decl.description.clone().unwrap_or_default(),
            src_dir: PathBuf::from(src_dir),
            last_updated: decl.last_updated.unwrap_or(false),
        }
    }
}

fn validate_src_dir(src_dir: &str, root: Option<&Path>, diag: &mut Diagnostics) {
    let field = FieldPath::new("srcDir");
    let path = Path::new(src_dir);

    if src_dir.trim().is_empty() {
        diag.error_with_hint(field, "srcDir must not be empty", "use \".\" for the project root");
        return;
    }
    if path.has_root() || path.is_absolute() {
        diag.error_with_hint(
            field,
            format!("`{src_dir}` is absolute, srcDir must be relative"),
            "use a path relative to the config file, e.g.: srcDir = \"docs\"",
        );
        return;
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        diag.error(field, format!("`{src_dir}` escapes the project root"));
        return;
    }

    if let Some(root) = root
        && !root.join(path).is_dir()
    {
        diag.error(
            field,
            format!("directory `{}` not found", root.join(path).display()),
        );
    }
}

/// Check for a BCP-47-shaped tag: `en`, `en-US`, `zh-Hans-CN`.
///
/// The primary subtag must be alphabetic; the rest may be alphanumeric.
/// Every subtag is 1 to 8 characters.
pub fn is_locale_tag(tag: &str) -> bool {
    let mut parts = tag.split('-');
    let Some(primary) = parts.next() else {
        return false;
    };
    let primary_ok = (2..=8).contains(&primary.len())
        && primary.chars().all(|c| c.is_ascii_alphabetic());

    primary_ok
        && parts.all(|p| (1..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphanumeric()))
}
