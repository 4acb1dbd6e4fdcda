//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Format;

/// Docs-site configuration checker
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load and validate the declaration
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Compare two declarations structurally
    #[command(visible_alias = "d")]
    Diff {
        /// Declaration before the edit
        #[arg(value_hint = clap::ValueHint::FilePath)]
        old: PathBuf,

        /// Declaration after the edit
        #[arg(value_hint = clap::ValueHint::FilePath)]
        new: PathBuf,

        /// Print the diff as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print the canonical declaration with defaults filled in
    Dump {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Toml)]
        format: Format,
    },

    /// List the page paths found under srcDir
    #[command(visible_alias = "p")]
    Pages,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Also check that every nav and sidebar link resolves to a page
    #[arg(short, long)]
    pub deep: bool,

    /// Treat unresolved links as warnings instead of errors
    #[arg(long, short = 'w', requires = "deep")]
    pub warn_only: bool,
}
