//! `diff` command: structural comparison of two declaration files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{self, ConfigDocument, Format, LoadOptions};
use crate::diff::diff;
use crate::{log, logger};

pub fn run(old: &Path, new: &Path, json: bool) -> Result<()> {
    let old_doc = read_document(old)?;
    let new_doc = read_document(new)?;
    let changes = diff(&old_doc, &new_doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&changes)?);
    } else {
        println!("{changes}");
    }

    if !changes.is_empty() {
        log!("diff"; "{}", logger::plural_count(changes.len(), "change"));
    }
    Ok(())
}

/// Load a declaration without the `srcDir` existence check, so revisions
/// taken out of version control compare cleanly.
fn read_document(path: &Path) -> Result<ConfigDocument> {
    let format = Format::from_path(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    let loaded = config::load_str(&content, format, &LoadOptions::new())
        .with_context(|| format!("`{}` is not a valid declaration", path.display()))?;
    logger::warnings(&loaded.warnings);
    Ok(loaded.document)
}
