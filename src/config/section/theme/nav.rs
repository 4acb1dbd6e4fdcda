//! Navigation items shared by `themeConfig.nav` and sidebar sections.
//!
//! An item is either a leaf that links to a page or a group of items:
//!
//! ```toml
//! [[themeConfig.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[themeConfig.nav]]
//! text = "Docs"
//! items = [
//!     { text = "Tools", link = "/tools/01-git" },
//!     { text = "Node.js", link = "/nodejs/01-intro" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{Diagnostics, FieldPath};

/// A validated navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Leaf { text: String, link: String },
    Group { text: String, items: Vec<NavItem> },
}

impl NavItem {
    pub fn leaf(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Leaf {
            text: text.into(),
            link: link.into(),
        }
    }

    pub fn group(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self::Group {
            text: text.into(),
            items,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Leaf { text, .. } | Self::Group { text, .. } => text,
        }
    }

    /// Link target of a leaf.
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Leaf { link, .. } => Some(link.as_str()),
            Self::Group { .. } => None,
        }
    }

    /// Children of a group, in display order.
    pub fn items(&self) -> Option<&[NavItem]> {
        match self {
            Self::Leaf { .. } => None,
            Self::Group { items, .. } => Some(items.as_slice()),
        }
    }

    #[inline]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    fn to_decl(&self) -> NavItemDecl {
        match self {
            Self::Leaf { text, link } => NavItemDecl {
                text: Some(text.clone()),
                link: Some(link.clone()),
                items: None,
            },
            Self::Group { text, items } => NavItemDecl {
                text: Some(text.clone()),
                link: None,
                items: Some(items_to_decl(items)),
            },
        }
    }
}

pub fn items_to_decl(items: &[NavItem]) -> Vec<NavItemDecl> {
    items.iter().map(NavItem::to_decl).collect()
}

/// Collect every leaf link with the path it was declared at, depth first.
pub fn collect_links<'a>(
    items: &'a [NavItem],
    field: &FieldPath,
    out: &mut Vec<(FieldPath, &'a str)>,
) {
    for (i, item) in items.iter().enumerate() {
        let item_field = field.index(i);
        match item {
            NavItem::Leaf { link, .. } => out.push((item_field.key("link"), link.as_str())),
            NavItem::Group { items, .. } => {
                collect_links(items, &item_field.key("items"), out);
            }
        }
    }
}

// ============================================================================
// Declaration
// ============================================================================

/// Raw navigation entry. Leaf and group share one shape until validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavItemDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NavItemDecl>>,
}

/// Validate a sequence of items, keeping declared order.
pub fn resolve_items(
    decls: &[NavItemDecl],
    field: &FieldPath,
    diag: &mut Diagnostics,
) -> Vec<NavItem> {
    decls
        .iter()
        .enumerate()
        .map(|(i, decl)| resolve_item(decl, &field.index(i), diag))
        .collect()
}

/// Validate one item.
///
/// # Checks
/// - `text` is present and non-empty
/// - exactly one of `link` / `items` is present
/// - `link` starts with `/`
/// - empty groups are linted
fn resolve_item(decl: &NavItemDecl, field: &FieldPath, diag: &mut Diagnostics) -> NavItem {
    let text = match decl.text.as_deref() {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        Some(_) => {
            diag.error(field.key("text"), "text must not be empty");
            String::new()
        }
        None => {
            diag.error(field.key("text"), "required field is missing");
            String::new()
        }
    };

    match (&decl.link, &decl.items) {
        (Some(link), None) => {
            validate_link(link, &field.key("link"), diag);
            NavItem::Leaf {
                text,
                link: link.clone(),
            }
        }
        (None, Some(items)) => {
            let items_field = field.key("items");
            if items.is_empty() {
                diag.lint(items_field.clone(), "group has no items and renders empty");
            }
            NavItem::Group {
                text,
                items: resolve_items(items, &items_field, diag),
            }
        }
        (Some(_), Some(_)) => {
            diag.error_with_hint(
                field.clone(),
                "item has both `link` and `items`",
                "a leaf has `link`, a group has `items`; keep one",
            );
            NavItem::Group {
                text,
                items: Vec::new(),
            }
        }
        (None, None) => {
            diag.error_with_hint(
                field.clone(),
                "item has neither `link` nor `items`",
                "add `link = \"/path\"` for a leaf or `items = [...]` for a group",
            );
            NavItem::Group {
                text,
                items: Vec::new(),
            }
        }
    }
}

fn validate_link(link: &str, field: &FieldPath, diag: &mut Diagnostics) {
    if !link.starts_with('/') {
        diag.error_with_hint(
            field.clone(),
            format!("link `{link}` must start with `/`"),
            format!("use a site-absolute path, e.g.: \"/{}\"", link.trim_start_matches("./")),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(toml_src: &str) -> (Vec<NavItem>, Diagnostics) {
        #[derive(Deserialize)]
        struct Wrapper {
            nav: Vec<NavItemDecl>,
        }
        let wrapper: Wrapper = toml::from_str(toml_src).unwrap();
        let mut diag = Diagnostics::new();
        let items = resolve_items(&wrapper.nav, &FieldPath::new("themeConfig.nav"), &mut diag);
        (items, diag)
    }

    #[test]
    fn test_leaf_and_group() {
        let (items, diag) = resolve(
            r#"
[[nav]]
text = "Home"
link = "/"

[[nav]]
text = "Docs"
items = [
    { text = "Tools", link = "/tools/01-git" },
    { text = "React", link = "/react/01-hooks" },
]
"#,
        );
        assert!(!diag.has_errors());
        assert_eq!(items[0], NavItem::leaf("Home", "/"));
        assert!(items[1].is_group());
        let children = items[1].items().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].link(), Some("/react/01-hooks"));
    }

    #[test]
    fn test_both_link_and_items_rejected() {
        let (_, diag) = resolve(r#"nav = [{ text = "Docs", link = "/docs/", items = [] }]"#);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "themeConfig.nav[0]");
        assert!(diag.errors()[0].message.contains("both"));
    }

    #[test]
    fn test_neither_link_nor_items_rejected() {
        let (_, diag) = resolve(r#"nav = [{ text = "Docs", items = [{ text = "Orphan" }] }]"#);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "themeConfig.nav[0].items[0]");
        assert!(diag.errors()[0].message.contains("neither"));
    }

    #[test]
    fn test_missing_text() {
        let (_, diag) = resolve(r#"nav = [{ link = "/" }]"#);
        assert_eq!(diag.errors()[0].field.as_str(), "themeConfig.nav[0].text");
    }

    #[test]
    fn test_relative_link_rejected() {
        let (_, diag) = resolve(r#"nav = [{ text = "Git", link = "tools/01-git" }]"#);
        assert_eq!(diag.errors()[0].field.as_str(), "themeConfig.nav[0].link");
        assert!(diag.errors()[0].hint.as_deref().unwrap().contains("/tools/01-git"));
    }

    #[test]
    fn test_empty_group_is_lint() {
        let (items, diag) = resolve(r#"nav = [{ text = "Soon", items = [] }]"#);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(items[0].items(), Some(&[][..]));
    }

    #[test]
    fn test_collect_links_in_order() {
        let items = vec![
            NavItem::leaf("Home", "/"),
            NavItem::group(
                "Docs",
                vec![NavItem::leaf("A", "/a/1"), NavItem::leaf("B", "/b/1")],
            ),
        ];
        let mut links = Vec::new();
        collect_links(&items, &FieldPath::new("nav"), &mut links);

        let found: Vec<_> = links.iter().map(|(f, l)| (f.as_str(), *l)).collect();
        assert_eq!(
            found,
            vec![
                ("nav[0].link", "/"),
                ("nav[1].items[0].link", "/a/1"),
                ("nav[1].items[1].link", "/b/1"),
            ]
        );
    }
}
