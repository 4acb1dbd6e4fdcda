//! `[themeConfig]` section.
//!
//! Navigation bar, sidebar sections, social links and page chrome labels.
//!
//! # Example
//!
//! ```toml
//! [themeConfig]
//! outlineTitle = "On this page"
//!
//! [themeConfig.docFooter]
//! prev = "Previous"
//! next = "Next"
//! ```
//!
//! | Module    | Key                          |
//! |-----------|------------------------------|
//! | `nav`     | `themeConfig.nav` (+ items)  |
//! | `sidebar` | `themeConfig.sidebar`        |
//! | `social`  | `themeConfig.socialLinks`    |

mod nav;
mod sidebar;
mod social;

pub use nav::{NavItem, NavItemDecl, collect_links};
pub use sidebar::{Sidebar, SidebarDecl, is_prefix_key};
pub use social::{SocialIcon, SocialLink, SocialLinkDecl};

use serde::{Deserialize, Serialize};

use crate::config::{Diagnostics, FieldPath};

/// Validated theme configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Top navigation bar, in display order.
    pub nav: Vec<NavItem>,
    pub sidebar: Sidebar,
    pub social_links: Vec<SocialLink>,
    /// Heading of the on-page outline.
    pub outline_title: String,
    pub doc_footer: DocFooterLabels,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            nav: Vec::new(),
            sidebar: Sidebar::default(),
            social_links: Vec::new(),
            outline_title: Self::DEFAULT_OUTLINE_TITLE.into(),
            doc_footer: DocFooterLabels::default(),
        }
    }
}

/// Labels of the previous/next links at the bottom of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFooterLabels {
    pub prev: String,
    pub next: String,
}

impl Default for DocFooterLabels {
    fn default() -> Self {
        Self {
            prev: "Previous page".into(),
            next: "Next page".into(),
        }
    }
}

impl ThemeConfig {
    pub const DEFAULT_OUTLINE_TITLE: &'static str = "On this page";

    /// Validate the theme section.
    pub fn resolve(decl: Option<&ThemeDecl>, diag: &mut Diagnostics) -> Self {
        let Some(decl) = decl else {
            return Self::default();
        };
        let field = FieldPath::new("themeConfig");
        let defaults = Self::default();

        let nav_field = field.key("nav");
        let nav = nav::resolve_items(decl.nav.as_deref().unwrap_or_default(), &nav_field, diag);

        let sidebar_field = field.key("sidebar");
        let sidebar = match &decl.sidebar {
            Some(sidebar) => Sidebar::resolve(sidebar, &sidebar_field, diag),
            None => Sidebar::default(),
        };

        let mut nav_links = Vec::new();
        collect_links(&nav, &nav_field, &mut nav_links);
        let nav_links: Vec<&str> = nav_links.into_iter().map(|(_, link)| link).collect();
        sidebar.lint_reachability(&nav_links, &sidebar_field, diag);

        let social_links = social::resolve_links(
            decl.social_links.as_deref().unwrap_or_default(),
            &field.key("socialLinks"),
            diag,
        );

        let outline_title = match decl.outline_title.as_deref() {
            Some(title) if title.trim().is_empty() => {
                diag.lint(
                    field.key("outlineTitle"),
                    "empty outline title hides the outline heading",
                );
                title.to_string()
            }
            Some(title) => title.to_string(),
            None => defaults.outline_title,
        };

        let doc_footer = match &decl.doc_footer {
            Some(footer) => DocFooterLabels {
                prev: footer.prev.clone().unwrap_or(defaults.doc_footer.prev),
                next: footer.next.clone().unwrap_or(defaults.doc_footer.next),
            },
            None => defaults.doc_footer,
        };

        Self {
            nav,
            sidebar,
            social_links,
            outline_title,
            doc_footer,
        }
    }

    pub fn to_decl(&self) -> ThemeDecl {
        ThemeDecl {
            nav: Some(nav::items_to_decl(&self.nav)),
            sidebar: Some(self.sidebar.to_decl()),
            social_links: Some(social::links_to_decl(&self.social_links)),
            outline_title: Some(self.outline_title.clone()),
            doc_footer: Some(DocFooterDecl {
                prev: Some(self.doc_footer.prev.clone()),
                next: Some(self.doc_footer.next.clone()),
            }),
        }
    }

    /// Every nav and sidebar link with its declaration path, in declared order.
    pub fn links(&self) -> Vec<(FieldPath, &str)> {
        let field = FieldPath::new("themeConfig");
        let mut out = Vec::new();
        collect_links(&self.nav, &field.key("nav"), &mut out);
        let sidebar_field = field.key("sidebar");
        for (key, items) in self.sidebar.iter() {
            collect_links(items, &sidebar_field.entry(key), &mut out);
        }
        out
    }
}

// ============================================================================
// Declaration
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<Vec<NavItemDecl>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<SidebarDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLinkDecl>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_footer: Option<DocFooterDecl>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocFooterDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_declaration;

    fn resolve(extra: &str) -> (ThemeConfig, Diagnostics) {
        let decl = test_parse_declaration(extra);
        let mut diag = Diagnostics::new();
        let theme = ThemeConfig::resolve(decl.theme_config.as_ref(), &mut diag);
        (theme, diag)
    }

    #[test]
    fn test_defaults() {
        let (theme, diag) = resolve("");
        assert!(!diag.has_errors());
        assert_eq!(theme, ThemeConfig::default());
        assert_eq!(theme.outline_title, "On this page");
    }

    #[test]
    fn test_doc_footer_partial() {
        let (theme, _) = resolve("[themeConfig.docFooter]\nprev = \"上一页\"");
        assert_eq!(theme.doc_footer.prev, "上一页");
        assert_eq!(theme.doc_footer.next, "Next page");
    }

    #[test]
    fn test_links_cover_nav_and_sidebar() {
        let (theme, diag) = resolve(
            r#"
[[themeConfig.nav]]
text = "Home"
link = "/"

[themeConfig.sidebar]
"/tools/" = [{ text = "Git", link = "/tools/01-git" }]
"#,
        );
        assert!(!diag.has_errors());

        let links: Vec<_> = theme
            .links()
            .into_iter()
            .map(|(f, l)| (f.as_str().to_string(), l))
            .collect();
        assert_eq!(links[0], ("themeConfig.nav[0].link".to_string(), "/"));
        assert_eq!(
            links[1],
            (r#"themeConfig.sidebar["/tools/"][0].link"#.to_string(), "/tools/01-git")
        );
    }

    #[test]
    fn test_errors_from_all_parts_collected() {
        let (_, diag) = resolve(
            r#"
[[themeConfig.nav]]
text = "Broken"

[[themeConfig.socialLinks]]
icon = "myspace"
link = "https://myspace.com"
"#,
        );
        assert_eq!(diag.len(), 2);
    }
}
