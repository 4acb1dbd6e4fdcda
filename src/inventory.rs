//! Content inventories for deep link checks.
//!
//! A link like `/tools/01-git` resolves when the source directory holds
//! `tools/01-git.md` or `tools/01-git/index.md`. Inventories answer that
//! question without the loader touching the filesystem itself.
//!
//! | Type              | Backing                                        |
//! |-------------------|------------------------------------------------|
//! | `MemoryInventory` | Set of link paths, built by hand or by a scan |
//! | `FsInventory`     | Direct file checks under `srcDir`              |
//! | `Fn(&str) -> bool`| Any closure, for embedding callers             |

use std::io;
use std::path::{Component, Path, PathBuf};

use jwalk::WalkDir;
use rustc_hash::FxHashSet;

/// Oracle answering whether a content page exists for a link path.
pub trait ContentInventory {
    /// `path` is a normalized site path such as `/flutter/01-flutter`.
    fn exists(&self, path: &str) -> bool;
}

impl<F> ContentInventory for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}

/// Strip the parts of a link that do not name a page.
///
/// # Examples
///
/// - `/tools/01-git#install` -> `/tools/01-git`
/// - `/tools/01-git.md` -> `/tools/01-git`
/// - `/tools/01-git.html?x=1` -> `/tools/01-git`
pub fn normalize_link(link: &str) -> &str {
    let end = link.find(['#', '?']).unwrap_or(link.len());
    let link = &link[..end];
    link.strip_suffix(".md")
        .or_else(|| link.strip_suffix(".html"))
        .unwrap_or(link)
}

// ============================================================================
// MemoryInventory
// ============================================================================

/// In-memory set of page paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    pages: FxHashSet<String>,
}

impl MemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>) {
        self.pages.insert(path.into());
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page paths in sorted order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut pages: Vec<_> = self.pages.iter().map(String::as_str).collect();
        pages.sort_unstable();
        pages
    }

    /// Walk `src_dir` for markdown pages.
    ///
    /// `guide/intro.md` registers `/guide/intro`; `guide/index.md` registers
    /// `/guide/`, `/guide` and `/guide/index`. Hidden entries are skipped.
    pub fn scan(src_dir: &Path) -> io::Result<Self> {
        if !src_dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("content directory `{}` not found", src_dir.display()),
            ));
        }

        let mut inventory = Self::new();
        for entry in WalkDir::new(src_dir)
            .skip_hidden(true)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            if let Some(page) = page_path(src_dir, &path) {
                inventory.register(&page);
            }
        }
        Ok(inventory)
    }

    fn register(&mut self, page: &str) {
        match page.strip_suffix("/index") {
            Some(dir) => {
                self.insert(format!("{dir}/"));
                self.insert(page);
                if !dir.is_empty() {
                    self.insert(dir);
                }
            }
            None => self.insert(page),
        }
    }
}

impl ContentInventory for MemoryInventory {
    fn exists(&self, path: &str) -> bool {
        self.pages.contains(path)
    }
}

impl<S: Into<String>> FromIterator<S> for MemoryInventory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Map `<src>/a/b.md` to `/a/b`. Non-markdown files map to `None`.
fn page_path(src_dir: &Path, file: &Path) -> Option<String> {
    if file.extension()? != "md" {
        return None;
    }
    let relative = file.strip_prefix(src_dir).ok()?.with_extension("");

    let mut page = String::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                page.push('/');
                page.push_str(part.to_str()?);
            }
            _ => return None,
        }
    }
    Some(page)
}

// ============================================================================
// FsInventory
// ============================================================================

/// Checks pages directly on disk, without a prior scan.
#[derive(Debug, Clone)]
pub struct FsInventory {
    src_dir: PathBuf,
}

impl FsInventory {
    pub fn new(src_dir: impl Into<PathBuf>) -> Self {
        Self {
            src_dir: src_dir.into(),
        }
    }

    /// Files that would serve `path`, most specific first.
    fn candidates(&self, path: &str) -> Vec<PathBuf> {
        let relative = path.trim_start_matches('/');
        if relative.is_empty() || relative.ends_with('/') {
            return vec![self.src_dir.join(relative).join("index.md")];
        }
        vec![
            self.src_dir.join(format!("{relative}.md")),
            self.src_dir.join(relative).join("index.md"),
        ]
    }
}

impl ContentInventory for FsInventory {
    fn exists(&self, path: &str) -> bool {
        if path.split('/').any(|segment| segment == "..") {
            return false;
        }
        self.candidates(path).iter().any(|p| p.is_file())
    }
}
