//! `[themeConfig.sidebar]`: sidebar sections keyed by path prefix.
//!
//! # Example
//!
//! ```toml
//! [themeConfig.sidebar]
//! "/tools/" = [
//!     { text = "Git", link = "/tools/01-git" },
//!     { text = "VS Code", link = "/tools/02-vscode" },
//! ]
//! ```
//!
//! The renderer picks the section whose key is the longest prefix of the
//! current page path. Keys are expected to look like `/name/`; anything else is
//! tolerated with a lint warning because prefix matching still works loosely.

use std::collections::BTreeMap;

use super::nav::{self, NavItem, NavItemDecl};
use crate::config::{Diagnostics, FieldPath};

/// Raw sidebar map.
pub type SidebarDecl = BTreeMap<String, Vec<NavItemDecl>>;

/// Validated sidebar sections.
///
/// Keys are kept sorted; item order inside a section is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebar {
    sections: BTreeMap<String, Vec<NavItem>>,
}

impl Sidebar {
    /// Items of the section declared under `prefix`.
    pub fn get(&self, prefix: &str) -> Option<&[NavItem]> {
        self.sections.get(prefix).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NavItem])> {
        self.sections
            .iter()
            .map(|(key, items)| (key.as_str(), items.as_slice()))
    }

    /// Section shown for a page: the longest key that prefixes `page`.
    ///
    /// Returns `None` when no key matches, which renders as an empty sidebar.
    pub fn section_for(&self, page: &str) -> Option<(&str, &[NavItem])> {
        self.iter()
            .filter(|(key, _)| page.starts_with(key))
            .max_by_key(|(key, _)| key.len())
    }

    pub fn to_decl(&self) -> SidebarDecl {
        self.sections
            .iter()
            .map(|(key, items)| (key.clone(), nav::items_to_decl(items)))
            .collect()
    }

    /// Validate every section.
    ///
    /// # Checks
    /// - items follow the same rules as nav items
    /// - keys look like `/prefix/` (lint)
    /// - sections are not empty (lint)
    pub fn resolve(decl: &SidebarDecl, field: &FieldPath, diag: &mut Diagnostics) -> Self {
        let sections = decl
            .iter()
            .map(|(key, items)| {
                let key_field = field.entry(key);
                lint_prefix_key(key, &key_field, diag);
                if items.is_empty() {
                    diag.lint(key_field.clone(), "sidebar section has no items");
                }
                (key.clone(), nav::resolve_items(items, &key_field, diag))
            })
            .collect();

        Self { sections }
    }

    /// Lint sections no nav link points into.
    ///
    /// A section is reachable when a nav link or one of its own links starts
    /// with the key; the second case covers sections entered from page
    /// content rather than the top bar.
    pub fn lint_reachability(
        &self,
        nav_links: &[&str],
        field: &FieldPath,
        diag: &mut Diagnostics,
    ) {
        for (key, items) in self.iter() {
            let from_nav = nav_links.iter().any(|link| link.starts_with(key));
            if from_nav {
                continue;
            }

            let mut own = Vec::new();
            nav::collect_links(items, field, &mut own);
            if own.iter().any(|(_, link)| link.starts_with(key)) {
                continue;
            }

            diag.lint_with_hint(
                field.entry(key),
                format!("no nav link or section link falls under `{key}`, sidebar is unreachable"),
                "link a page under this prefix from `themeConfig.nav`",
            );
        }
    }
}

/// Keys should start and end with `/`. The root key `/` is accepted.
pub fn is_prefix_key(key: &str) -> bool {
    key.starts_with('/') && key.ends_with('/')
}

fn lint_prefix_key(key: &str, field: &FieldPath, diag: &mut Diagnostics) {
    if is_prefix_key(key) {
        return;
    }

    let suggested = format!("/{}/", key.trim_matches('/'));
    diag.lint_with_hint(
        field.clone(),
        format!("sidebar key `{key}` does not follow the `/prefix/` convention"),
        format!("rename the key to \"{suggested}\""),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IssueKind;

    fn resolve(toml_src: &str) -> (Sidebar, Diagnostics) {
        let decl: SidebarDecl = toml::from_str(toml_src).unwrap();
        let mut diag = Diagnostics::new();
        let sidebar = Sidebar::resolve(&decl, &FieldPath::new("themeConfig.sidebar"), &mut diag);
        (sidebar, diag)
    }

    #[test]
    fn test_prefix_keys() {
        assert!(is_prefix_key("/tools/"));
        assert!(is_prefix_key("/"));
        assert!(!is_prefix_key("/react"));
        assert!(!is_prefix_key("react/"));
        assert!(!is_prefix_key(""));
    }

    #[test]
    fn test_missing_trailing_slash_is_lint() {
        let (sidebar, diag) = resolve(
            r#"
"/nodejs/" = [{ text = "Intro", link = "/nodejs/01-intro" }]
"/react" = [{ text = "Hooks", link = "/react/01-hooks" }]
"#,
        );
        assert!(!diag.has_errors());
        assert_eq!(sidebar.len(), 2);

        let warnings = diag.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, IssueKind::Lint);
        assert_eq!(warnings[0].field.as_str(), r#"themeConfig.sidebar["/react"]"#);
        assert!(warnings[0].hint.as_deref().unwrap().contains("/react/"));
    }

    #[test]
    fn test_item_order_preserved() {
        let (sidebar, _) = resolve(
            r#"
"/tools/" = [
    { text = "Git", link = "/tools/01-git" },
    { text = "VS Code", link = "/tools/02-vscode" },
    { text = "Chrome", link = "/tools/03-chrome" },
]
"#,
        );
        let texts: Vec<_> = sidebar.get("/tools/").unwrap().iter().map(NavItem::text).collect();
        assert_eq!(texts, ["Git", "VS Code", "Chrome"]);
    }

    #[test]
    fn test_item_errors_carry_section_path() {
        let (_, diag) = resolve(r#""/tools/" = [{ text = "Git", link = "tools/01-git" }]"#);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            r#"themeConfig.sidebar["/tools/"][0].link"#
        );
    }

    #[test]
    fn test_section_for_longest_prefix() {
        let (sidebar, _) = resolve(
            r#"
"/" = [{ text = "Home", link = "/" }]
"/tools/" = [{ text = "Git", link = "/tools/01-git" }]
"#,
        );
        assert_eq!(sidebar.section_for("/tools/01-git").unwrap().0, "/tools/");
        assert_eq!(sidebar.section_for("/about").unwrap().0, "/");
        assert!(Sidebar::default().section_for("/tools/").is_none());
    }

    #[test]
    fn test_unreachable_section_is_lint() {
        let (sidebar, _) = resolve(
            r#"
"/tools/" = [{ text = "Git", link = "/tools/01-git" }]
"/archive/" = [{ text = "Old", link = "/legacy/old" }]
"#,
        );
        let mut diag = Diagnostics::new();
        let field = FieldPath::new("themeConfig.sidebar");
        sidebar.lint_reachability(&["/"], &field, &mut diag);

        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].field.as_str().contains("/archive/"));
    }
}
