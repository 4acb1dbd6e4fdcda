//! `check` command: validate the declaration, optionally against content.

use std::path::Path;

use anyhow::Result;

use super::{CheckArgs, load_config};
use crate::config::{self, LinkLevel, LoadOptions};
use crate::inventory::FsInventory;
use crate::logger::{self, plural_count};
use crate::{debug, log};

/// Load `config_path`; with `--deep`, check every link against `srcDir`.
pub fn run(config_path: &Path, args: &CheckArgs) -> Result<()> {
    let loaded = load_config(config_path, &LoadOptions::new())?;
    let mut warning_count = loaded.warnings.len();

    if args.deep {
        let src_dir = config::content_dir(config_path, &loaded.document);
        debug!("check"; "resolving links under `{}`", src_dir.display());
        let inventory = FsInventory::new(src_dir);

        let level = if args.warn_only {
            LinkLevel::Warn
        } else {
            LinkLevel::Error
        };
        let options = LoadOptions::new().inventory(&inventory).link_level(level);
        // Schema warnings were already printed by the first pass.
        let deep = config::load_file(config_path, &options)?;
        let links: Vec<_> = deep
            .warnings
            .into_iter()
            .filter(|issue| !loaded.warnings.contains(issue))
            .collect();
        logger::warnings(&links);
        warning_count += links.len();
    }

    let theme = loaded.document.theme();
    log!(
        "ok";
        "`{}`: {}, {}, {}",
        config_path.display(),
        plural_count(theme.nav.len(), "nav item"),
        plural_count(theme.sidebar.len(), "sidebar section"),
        plural_count(warning_count, "warning"),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, Format, NOTES_V1, load_str};
    use crate::inventory::normalize_link;
    use std::fs;
    use tempfile::TempDir;

    /// A site for the first notes declaration with every linked page but `missing`.
    fn site(missing: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("docsite.toml"), NOTES_V1).unwrap();

        let docs = dir.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        let document = load_str(NOTES_V1, Format::Toml, &LoadOptions::new())
            .unwrap()
            .document;
        for (_, link) in document.theme().links() {
            let page = normalize_link(link);
            if page == "/" || page == missing {
                continue;
            }
            let relative = page.trim_start_matches('/');
            let file = if relative.ends_with('/') {
                docs.join(relative).join("index.md")
            } else {
                docs.join(format!("{relative}.md"))
            };
            fs::create_dir_all(file.parent().unwrap()).unwrap();
            fs::write(file, "# page").unwrap();
        }
        dir
    }

    fn deep(warn_only: bool) -> CheckArgs {
        CheckArgs {
            deep: true,
            warn_only,
        }
    }

    #[test]
    fn test_deep_check_passes_with_all_pages() {
        let dir = site("");
        run(&dir.path().join("docsite.toml"), &deep(false)).unwrap();
    }

    #[test]
    fn test_deep_check_reports_missing_page() {
        let dir = site("/react/02-rendering");
        let config = dir.path().join("docsite.toml");

        let err = run(&config, &deep(false)).unwrap_err();
        let Some(ConfigError::LinkIntegrity(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected link integrity error, got {err:?}");
        };
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("/react/02-rendering"));

        run(&config, &deep(true)).unwrap();
    }
}
