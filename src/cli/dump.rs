//! `dump` command: print the canonical declaration.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use super::load_config;
use crate::config::{Format, LoadOptions};

/// Every default is written out, so the output also documents the effective
/// configuration.
pub fn run(config_path: &Path, format: Format) -> Result<()> {
    let loaded = load_config(config_path, &LoadOptions::new())?;
    let rendered = loaded.document.render(format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
