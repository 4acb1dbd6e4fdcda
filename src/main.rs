//! Docsite - check, diff and dump documentation site declarations.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use docsite::cli::{self, Cli, Commands};
use docsite::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Check { args } => cli::check::run(&cli::locate_config(&cli)?, args),
        Commands::Diff { old, new, json } => cli::diff::run(old, new, *json),
        Commands::Dump { format } => cli::dump::run(&cli::locate_config(&cli)?, *format),
        Commands::Pages => cli::pages::run(&cli::locate_config(&cli)?),
    }
}
