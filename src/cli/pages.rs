//! `pages` command: list the page paths a deep check resolves links against.

use std::path::Path;

use anyhow::{Context, Result};

use super::load_config;
use crate::config::{self, LoadOptions};
use crate::inventory::MemoryInventory;
use crate::{log, logger};

pub fn run(config_path: &Path) -> Result<()> {
    let loaded = load_config(config_path, &LoadOptions::new())?;
    let src_dir = config::content_dir(config_path, &loaded.document);
    let inventory = MemoryInventory::scan(&src_dir)
        .with_context(|| format!("failed to scan `{}`", src_dir.display()))?;

    for page in inventory.sorted() {
        println!("{page}");
    }
    log!(
        "pages";
        "{} under `{}`",
        logger::plural_count(inventory.len(), "path"),
        src_dir.display()
    );
    Ok(())
}
