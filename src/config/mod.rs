//! Site configuration loading and validation.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per part of the declaration
//! │   ├── site       # lang, title, description, srcDir, lastUpdated
//! │   ├── markdown   # [markdown]
//! │   ├── theme/     # [themeConfig] nav, sidebar, socialLinks, docFooter
//! │   └── server     # [server]
//! ├── types/         # FieldPath, Issue, Diagnostics, ConfigError
//! ├── format         # TOML / JSON parsing and rendering
//! ├── util           # Config file discovery
//! └── mod.rs         # Declaration, ConfigDocument, load (this file)
//! ```
//!
//! # Loading
//!
//! ```text
//! text ──parse──► Declaration ──load──► ConfigDocument + lint warnings
//!                  (all optional)        (validated, read-only)
//! ```
//!
//! `load` walks the whole declaration and reports every schema error at once.
//! When a content inventory is supplied it also checks that each nav and
//! sidebar link resolves to a page (deep-check mode).

mod format;
pub mod section;
mod types;
mod util;

pub use format::{Format, Parsed};
pub use section::{
    DocFooterLabels, ImageOptions, MarkdownOptions, NavItem, ServerOptions, Sidebar, SiteMeta,
    SocialIcon, SocialLink, ThemeConfig,
};
pub use types::{ConfigError, Diagnostics, FieldPath, Issue, IssueKind};
pub use util::{find_config_file, find_config_file_from};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::inventory::{ContentInventory, normalize_link};
use section::{MarkdownDecl, ServerDecl, ThemeDecl};

// ============================================================================
// Declaration
// ============================================================================

/// Raw declaration as written on disk.
///
/// Every field is optional here so that missing values are reported with
/// their path by `load` rather than by the parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<MarkdownDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_config: Option<ThemeDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerDecl>,
}

// ============================================================================
// ConfigDocument
// ============================================================================

/// A validated configuration document.
///
/// Only `load` builds one, and it exposes nothing but shared references, so
/// a loaded document stays exactly as validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    site: SiteMeta,
    markdown: MarkdownOptions,
    theme: ThemeConfig,
    server: ServerOptions,
}

impl ConfigDocument {
    pub fn site(&self) -> &SiteMeta {
        &self.site
    }

    pub fn markdown(&self) -> &MarkdownOptions {
        &self.markdown
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn server(&self) -> &ServerOptions {
        &self.server
    }

    /// Canonical declaration with every default spelled out.
    pub fn to_declaration(&self) -> Declaration {
        Declaration {
            lang: Some(self.site.lang.clone()),
            title: Some(self.site.title.clone()),
            description: Some(self.site.description.clone()),
            src_dir: Some(self.site.src_dir.to_string_lossy().into_owned()),
            last_updated: Some(self.site.last_updated),
            markdown: Some(self.markdown.to_decl()),
            theme_config: Some(self.theme.to_decl()),
            server: Some(self.server.to_decl()),
        }
    }

    /// Serialize the canonical declaration.
    pub fn render(&self, format: Format) -> Result<String, ConfigError> {
        format.render(&self.to_declaration())
    }
}

/// A document that passed validation, with the warnings found on the way.
#[derive(Debug)]
pub struct Loaded {
    pub document: ConfigDocument,
    pub warnings: Vec<Issue>,
}

// ============================================================================
// LoadOptions
// ============================================================================

/// How unresolved links are treated in deep-check mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkLevel {
    /// Unresolved links reject the document.
    #[default]
    Error,
    /// Unresolved links are reported as warnings.
    Warn,
}

/// Inputs to `load` beyond the declaration itself.
#[derive(Clone, Copy, Default)]
pub struct LoadOptions<'a> {
    /// Project root; enables the `srcDir` existence check.
    pub root: Option<&'a Path>,
    /// Content inventory; enables deep-check mode.
    pub inventory: Option<&'a dyn ContentInventory>,
    pub link_level: LinkLevel,
}

impl<'a> LoadOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, root: &'a Path) -> Self {
        self.root = Some(root);
        self
    }

    pub fn inventory(mut self, inventory: &'a dyn ContentInventory) -> Self {
        self.inventory = Some(inventory);
        self
    }

    pub fn link_level(mut self, level: LinkLevel) -> Self {
        self.link_level = level;
        self
    }
}

impl std::fmt::Debug for LoadOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadOptions")
            .field("root", &self.root)
            .field("inventory", &self.inventory.is_some())
            .field("link_level", &self.link_level)
            .finish()
    }
}

// ============================================================================
// load
// ============================================================================

/// Validate a declaration into a `ConfigDocument`.
///
/// Schema errors from every section are collected before failing. Link
/// integrity is checked only when `options.inventory` is set, and only once
/// the schema is valid.
pub fn load(decl: &Declaration, options: &LoadOptions<'_>) -> Result<Loaded, ConfigError> {
    let mut diag = Diagnostics::new();

    let document = ConfigDocument {
        site: SiteMeta::resolve(decl, options.root, &mut diag),
        markdown: MarkdownOptions::resolve(decl.markdown.as_ref()),
        theme: ThemeConfig::resolve(decl.theme_config.as_ref(), &mut diag),
        server: ServerOptions::resolve(decl.server.as_ref(), &mut diag),
    };

    if diag.has_errors() {
        return Err(ConfigError::Schema(diag));
    }

    // Past this point only unresolved links can be errors.
    if let Some(inventory) = options.inventory {
        check_links(&document, inventory, options.link_level, &mut diag);
    }

    let warnings = diag.into_result().map_err(ConfigError::LinkIntegrity)?;
    Ok(Loaded { document, warnings })
}

/// Parse and validate declaration text.
pub fn load_str(
    content: &str,
    format: Format,
    options: &LoadOptions<'_>,
) -> Result<Loaded, ConfigError> {
    let Parsed {
        declaration,
        warnings: mut unknown,
    } = format.parse(content)?;

    let mut loaded = load(&declaration, options)?;
    unknown.append(&mut loaded.warnings);
    loaded.warnings = unknown;
    Ok(loaded)
}

/// Read, parse and validate a declaration file.
///
/// The format comes from the extension. Without an explicit `options.root`,
/// the file's parent directory is the project root.
pub fn load_file(path: &Path, options: &LoadOptions<'_>) -> Result<Loaded, ConfigError> {
    let format = Format::from_path(path)?;
    let content =
        fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

    let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let mut options = *options;
    if options.root.is_none() {
        options.root = Some(&parent);
    }
    load_str(&content, format, &options)
}

/// Absolute content directory of a document declared in `config_path`.
pub fn content_dir(config_path: &Path, document: &ConfigDocument) -> PathBuf {
    config_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(&document.site().src_dir)
}

/// Deep check: every nav and sidebar link must name a page or be `/`.
fn check_links(
    document: &ConfigDocument,
    inventory: &dyn ContentInventory,
    level: LinkLevel,
    diag: &mut Diagnostics,
) {
    let src_dir = document.site.src_dir.display().to_string();

    for (field, link) in document.theme.links() {
        let page = normalize_link(link);
        if page == "/" || inventory.exists(page) {
            continue;
        }

        let issue = Issue::new(
            IssueKind::LinkIntegrity,
            field,
            format!("link `{page}` does not resolve to a content page"),
        )
        .with_hint(format!(
            "create `{src_dir}{page}.md` or point the link at an existing page"
        ));

        match level {
            LinkLevel::Error => diag.push_error(issue),
            LinkLevel::Warn => diag.push_warning(issue),
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a declaration with the required `lang` and `title` already set.
/// Panics if there are unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_declaration(extra: &str) -> Declaration {
    let content = format!("lang = \"en\"\ntitle = \"Test\"\n{extra}");
    let parsed = Format::Toml.parse(&content).unwrap();
    assert!(
        parsed.warnings.is_empty(),
        "test declaration has unknown fields: {:?}",
        parsed.warnings
    );
    parsed.declaration
}

/// First published declaration of the notes site.
#[cfg(test)]
pub const NOTES_V1: &str = include_str!("../../fixtures/notes-v1.toml");

/// Later declaration adding the security and flutter sections.
#[cfg(test)]
pub const NOTES_V2: &str = include_str!("../../fixtures/notes-v2.toml");

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::MemoryInventory;

    fn load_toml(content: &str) -> Result<Loaded, ConfigError> {
        load_str(content, Format::Toml, &LoadOptions::new())
    }

    fn texts(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(NavItem::text).collect()
    }

    #[test]
    fn test_first_declaration() {
        let loaded = load_toml(NOTES_V1).unwrap();
        let theme = loaded.document.theme();

        let tools = theme.sidebar.get("/tools/").unwrap();
        assert_eq!(tools.len(), 3);
        assert_eq!(texts(tools), ["Git", "VS Code", "Chrome DevTools"]);

        let docs = &theme.nav[1];
        assert_eq!(docs.text(), "Docs");
        assert!(docs.is_group());
        assert_eq!(docs.items().unwrap().len(), 6);
    }

    #[test]
    fn test_second_declaration() {
        let loaded = load_toml(NOTES_V2).unwrap();
        let theme = loaded.document.theme();

        assert_eq!(theme.sidebar.len(), 7);
        let docs = theme.nav.iter().find(|item| item.text() == "Docs").unwrap();
        let items = docs.items().unwrap();
        assert_eq!(items.len(), 8);
        assert_eq!(texts(&items[6..]), ["Security", "Flutter"]);
    }

    #[test]
    fn test_react_key_warns_not_fails() {
        let loaded = load_toml(NOTES_V1).unwrap();
        let lint: Vec<_> = loaded
            .warnings
            .iter()
            .filter(|w| w.field.as_str() == r#"themeConfig.sidebar["/react"]"#)
            .collect();
        assert_eq!(lint.len(), 1);
        assert_eq!(lint[0].kind, IssueKind::Lint);
    }

    #[test]
    fn test_site_fields() {
        let loaded = load_toml(NOTES_V1).unwrap();
        let doc = &loaded.document;
        assert_eq!(doc.site().lang, "zh-CN");
        assert_eq!(doc.site().src_dir, PathBuf::from("docs"));
        assert!(doc.site().last_updated);
        assert!(doc.markdown().image.lazy_loading);
        assert_eq!(doc.server().host, "0.0.0.0");
        assert_eq!(doc.theme().social_links[0].icon, SocialIcon::Github);
    }

    #[test]
    fn test_reload_is_idempotent() {
        for source in [NOTES_V1, NOTES_V2] {
            let first = load_toml(source).unwrap().document;
            for format in [Format::Toml, Format::Json] {
                let rendered = first.render(format).unwrap();
                let second = load_str(&rendered, format, &LoadOptions::new())
                    .unwrap()
                    .document;
                assert_eq!(first, second, "round trip through {format:?}");
            }
        }
    }

    #[test]
    fn test_nav_item_with_both_is_schema_error() {
        let content = format!(
            "{NOTES_V1}\n[[themeConfig.nav]]\ntext = \"Bad\"\nlink = \"/bad\"\nitems = []\n"
        );
        let err = load_toml(&content).unwrap_err();
        let ConfigError::Schema(diag) = err else {
            panic!("expected schema error, got {err:?}");
        };
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "themeConfig.nav[2]");
    }

    #[test]
    fn test_unknown_icon_is_schema_error() {
        let decl = test_parse_declaration(
            "[[themeConfig.socialLinks]]\nicon = \"not-a-provider\"\nlink = \"https://example.com\"",
        );
        let err = load(&decl, &LoadOptions::new()).unwrap_err();
        assert!(matches!(err, ConfigError::Schema(_)));
    }

    #[test]
    fn test_missing_required_fields_reported_together() {
        let err = load(&Declaration::default(), &LoadOptions::new()).unwrap_err();
        let diag = err.diagnostics().unwrap();
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["lang", "title"]);
    }

    #[test]
    fn test_deep_check_names_missing_link() {
        let decl = Format::Toml.parse(NOTES_V2).unwrap().declaration;
        let mut links = Vec::new();
        let first = load(&decl, &LoadOptions::new()).unwrap().document;
        for (_, link) in first.theme().links() {
            links.push(normalize_link(link).to_string());
        }
        let inventory: MemoryInventory = links
            .into_iter()
            .filter(|link| link != "/flutter/01-flutter")
            .collect();

        let options = LoadOptions::new().inventory(&inventory);
        let err = load(&decl, &options).unwrap_err();
        let ConfigError::LinkIntegrity(diag) = err else {
            panic!("expected link integrity error, got {err:?}");
        };
        assert!(!diag.is_empty());
        assert!(diag.errors().iter().all(|e| e.kind == IssueKind::LinkIntegrity));
        assert!(
            diag.errors()
                .iter()
                .all(|e| e.message.contains("/flutter/01-flutter"))
        );
    }

    #[test]
    fn test_deep_check_warn_level() {
        let decl = Format::Toml.parse(NOTES_V1).unwrap().declaration;
        let inventory = |_: &str| false;
        let options = LoadOptions::new()
            .inventory(&inventory)
            .link_level(LinkLevel::Warn);

        let loaded = load(&decl, &options).unwrap();
        assert!(
            loaded
                .warnings
                .iter()
                .any(|w| w.kind == IssueKind::LinkIntegrity)
        );
    }

    #[test]
    fn test_deep_check_skipped_on_schema_errors() {
        let decl = test_parse_declaration("[[themeConfig.nav]]\ntext = \"Broken\"");
        let inventory = |_: &str| false;
        let err = load(&decl, &LoadOptions::new().inventory(&inventory)).unwrap_err();
        assert!(matches!(err, ConfigError::Schema(_)));
    }

    #[test]
    fn test_load_file_checks_src_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("docsite.toml");
        fs::write(&path, NOTES_V1).unwrap();

        let err = load_file(&path, &LoadOptions::new()).unwrap_err();
        assert!(err.diagnostics().unwrap().errors()[0].field.as_str() == "srcDir");

        fs::create_dir(dir.path().join("docs")).unwrap();
        let loaded = load_file(&path, &LoadOptions::new()).unwrap();
        assert_eq!(
            content_dir(&path, &loaded.document),
            dir.path().join("docs")
        );
    }

    #[test]
    fn test_load_file_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_file(&dir.path().join("nope.toml"), &LoadOptions::new()).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_unknown_fields_become_warnings() {
        let content = format!("base = \"/notes/\"\n{NOTES_V1}");
        let loaded = load_toml(&content).unwrap();
        assert_eq!(loaded.warnings[0].field.as_str(), "base");
        assert_eq!(loaded.warnings[0].kind, IssueKind::Lint);
    }
}
