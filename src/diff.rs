//! Structural comparison of two loaded documents.
//!
//! Used to review a declaration edit before publishing: which scalar values
//! changed, which nav and sidebar links appeared or disappeared, and which
//! sidebar sections were added, removed or reordered.
//!
//! ```text
//! ~ title: "Notes" -> "Frontend Notes"
//! + themeConfig.sidebar: "/flutter/"
//! - themeConfig.nav: "/interview/"
//! ~ themeConfig.nav[1].text: "Docs" -> "Guides"
//! ↕ themeConfig.sidebar["/tools/"]: items reordered
//! ```

use std::fmt;

use owo_colors::OwoColorize;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::config::{ConfigDocument, FieldPath, NavItem, SocialLink, section::theme};

/// What happened to a field or collection member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
    Reordered,
}

impl ChangeKind {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Added => "+",
            Self::Removed => "-",
            Self::Modified => "~",
            Self::Reordered => "↕",
        }
    }
}

/// One difference between two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    pub kind: ChangeKind,
    /// Declaration path of the field or collection that changed.
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new: Option<String>,
}

/// Ordered list of differences, old document to new.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigDiff {
    pub changes: Vec<Change>,
}

impl ConfigDiff {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Changes of one kind under `field`.
    pub fn find(&self, kind: ChangeKind, field: &str) -> impl Iterator<Item = &Change> {
        self.changes
            .iter()
            .filter(move |c| c.kind == kind && c.field == field)
    }

    fn modified(&mut self, field: impl Into<String>, old: String, new: String) {
        if old != new {
            self.changes.push(Change {
                kind: ChangeKind::Modified,
                field: field.into(),
                old: Some(old),
                new: Some(new),
            });
        }
    }

    fn added(&mut self, field: &FieldPath, value: &str) {
        self.changes.push(Change {
            kind: ChangeKind::Added,
            field: field.as_str().to_string(),
            old: None,
            new: Some(value.to_string()),
        });
    }

    fn removed(&mut self, field: &FieldPath, value: &str) {
        self.changes.push(Change {
            kind: ChangeKind::Removed,
            field: field.as_str().to_string(),
            old: Some(value.to_string()),
            new: None,
        });
    }

    /// Members of `old` unmatched in `new` are removed, the reverse added.
    ///
    /// Duplicates are matched by count: `[a, a, b]` to `[a, b, b]` removes
    /// one `a` and adds one `b`. Returns whether anything was reported.
    fn members(&mut self, field: &FieldPath, old: &[&str], new: &[&str]) -> bool {
        let before = self.len();
        for value in unmatched(old, new) {
            self.removed(field, value);
        }
        for value in unmatched(new, old) {
            self.added(field, value);
        }
        self.len() != before
    }

    /// Like `members`, plus `Reordered` when the same members moved.
    fn sequence(&mut self, field: &FieldPath, old: &[&str], new: &[&str]) {
        if !self.members(field, old, new) && old != new {
            self.changes.push(Change {
                kind: ChangeKind::Reordered,
                field: field.as_str().to_string(),
                old: None,
                new: None,
            });
        }
    }

    /// Label changes between two nav trees.
    ///
    /// Leaves are matched by link, groups by their first link, so a renamed
    /// item is reported at its new path even after it moved.
    fn labels(&mut self, field: &FieldPath, old: &[NavItem], new: &[NavItem]) {
        let (mut before, mut after) = (Vec::new(), Vec::new());
        collect_labels(old, field, &mut before);
        collect_labels(new, field, &mut after);

        let mut old_text: FxHashMap<LabelKey<'_>, &str> = FxHashMap::default();
        for (_, key, text) in &before {
            old_text.entry(*key).or_insert(*text);
        }

        for (path, key, text) in &after {
            if let Some(previous) = old_text.get(key) {
                self.modified(path.key("text").as_str(), previous.to_string(), text.to_string());
            }
        }
    }
}

/// Entries of `values` left over once each is matched against one in `against`.
fn unmatched<'a>(values: &[&'a str], against: &[&str]) -> Vec<&'a str> {
    let mut available: FxHashMap<&str, usize> = FxHashMap::default();
    for value in against {
        *available.entry(*value).or_default() += 1;
    }

    values
        .iter()
        .copied()
        .filter(|value| match available.get_mut(value) {
            Some(n) if *n > 0 => {
                *n -= 1;
                false
            }
            _ => true,
        })
        .collect()
}

/// Identity of a nav item across two versions of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum LabelKey<'a> {
    Leaf(&'a str),
    Group(&'a str),
}

fn collect_labels<'a>(
    items: &'a [NavItem],
    field: &FieldPath,
    out: &mut Vec<(FieldPath, LabelKey<'a>, &'a str)>,
) {
    for (i, item) in items.iter().enumerate() {
        let item_field = field.index(i);
        match item {
            NavItem::Leaf { text, link } => {
                out.push((item_field, LabelKey::Leaf(link.as_str()), text.as_str()));
            }
            NavItem::Group { text, items } => {
                // Empty groups have no identity to follow.
                if let Some(link) = first_link(items) {
                    out.push((item_field.clone(), LabelKey::Group(link), text.as_str()));
                }
                collect_labels(items, &item_field.key("items"), out);
            }
        }
    }
}

fn first_link(items: &[NavItem]) -> Option<&str> {
    items.iter().find_map(|item| match item {
        NavItem::Leaf { link, .. } => Some(link.as_str()),
        NavItem::Group { items, .. } => first_link(items),
    })
}

impl fmt::Display for ConfigDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", "no changes".green());
        }

        for (i, change) in self.changes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let symbol = change.kind.symbol();
            let symbol = match change.kind {
                ChangeKind::Added => symbol.green().to_string(),
                ChangeKind::Removed => symbol.red().to_string(),
                ChangeKind::Modified | ChangeKind::Reordered => symbol.yellow().to_string(),
            };
            write!(f, "{symbol} {}:", change.field.cyan())?;

            match (&change.old, &change.new) {
                (Some(old), Some(new)) => write!(f, " {old:?} -> {new:?}")?,
                (Some(value), None) | (None, Some(value)) => write!(f, " {value:?}")?,
                (None, None) => write!(f, " {}", "items reordered".dimmed())?,
            }
        }
        Ok(())
    }
}

// ============================================================================
// diff
// ============================================================================

/// Compare two documents, `old` first.
pub fn diff(old: &ConfigDocument, new: &ConfigDocument) -> ConfigDiff {
    let mut out = ConfigDiff::default();

    let (a, b) = (old.site(), new.site());
    out.modified("lang", a.lang.clone(), b.lang.clone());
    out.modified("title", a.title.clone(), b.title.clone());
    out.modified("description", a.description.clone(), b.description.clone());
    out.modified(
        "srcDir",
        a.src_dir.display().to_string(),
        b.src_dir.display().to_string(),
    );
    out.modified(
        "lastUpdated",
        a.last_updated.to_string(),
        b.last_updated.to_string(),
    );
    out.modified(
        "markdown.image.lazyLoading",
        old.markdown().image.lazy_loading.to_string(),
        new.markdown().image.lazy_loading.to_string(),
    );

    diff_theme(old, new, &mut out);

    let (a, b) = (old.server(), new.server());
    out.modified("server.host", a.host.clone(), b.host.clone());
    out.modified("server.port", port_label(a.port), port_label(b.port));

    out
}

fn diff_theme(old: &ConfigDocument, new: &ConfigDocument, out: &mut ConfigDiff) {
    let (a, b) = (old.theme(), new.theme());
    let field = FieldPath::new("themeConfig");

    out.modified(
        field.key("outlineTitle").as_str(),
        a.outline_title.clone(),
        b.outline_title.clone(),
    );
    out.modified(
        field.key("docFooter").key("prev").as_str(),
        a.doc_footer.prev.clone(),
        b.doc_footer.prev.clone(),
    );
    out.modified(
        field.key("docFooter").key("next").as_str(),
        a.doc_footer.next.clone(),
        b.doc_footer.next.clone(),
    );

    let nav_field = field.key("nav");
    out.sequence(&nav_field, &links(&a.nav), &links(&b.nav));
    out.labels(&nav_field, &a.nav, &b.nav);

    let sidebar_field = field.key("sidebar");
    let old_keys: Vec<&str> = a.sidebar.keys().collect();
    let new_keys: Vec<&str> = b.sidebar.keys().collect();
    out.members(&sidebar_field, &old_keys, &new_keys);

    for (key, old_items) in a.sidebar.iter() {
        let Some(new_items) = b.sidebar.get(key) else {
            continue;
        };
        let section = sidebar_field.entry(key);
        out.sequence(&section, &links(old_items), &links(new_items));
        out.labels(&section, old_items, new_items);
    }

    let old_social = social(&a.social_links);
    let new_social = social(&b.social_links);
    out.members(
        &field.key("socialLinks"),
        &old_social.iter().map(String::as_str).collect::<Vec<_>>(),
        &new_social.iter().map(String::as_str).collect::<Vec<_>>(),
    );
}

/// Leaf links of a nav tree, depth first.
fn links(items: &[NavItem]) -> Vec<&str> {
    let mut out = Vec::new();
    theme::collect_links(items, &FieldPath::default(), &mut out);
    out.into_iter().map(|(_, link)| link).collect()
}

fn social(links: &[SocialLink]) -> Vec<String> {
    links
        .iter()
        .map(|link| format!("{} {}", link.icon, link.link))
        .collect()
}

fn port_label(port: Option<u16>) -> String {
    port.map_or_else(|| "default".to_string(), |p| p.to_string())
}
