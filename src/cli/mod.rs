//! Command-line interface module.

mod args;
pub mod check;
pub mod diff;
pub mod dump;
pub mod pages;

pub use args::{CheckArgs, Cli, Commands};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{self, Loaded, LoadOptions};
use crate::{debug, logger};

/// Locate the declaration named by `-C`.
pub fn locate_config(cli: &Cli) -> Result<PathBuf> {
    config::find_config_file(&cli.config).with_context(|| {
        format!(
            "`{}` not found in the current directory or any parent",
            cli.config.display()
        )
    })
}

/// Load a declaration file, printing its warnings.
pub fn load_config(path: &Path, options: &LoadOptions<'_>) -> Result<Loaded> {
    debug!("load"; "{}", path.display());
    let loaded = config::load_file(path, options)?;
    logger::warnings(&loaded.warnings);
    Ok(loaded)
}
