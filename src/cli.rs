//! CLI argument parsing module for denosync

use crate::domain::Precision;
use clap::Parser;
use std::path::PathBuf;

/// Parse a precision mode: auto, major, minor, or full
fn parse_precision(s: &str) -> Result<Precision, String> {
    s.parse()
}

/// Sync Deno import map versions with package.json declarations
#[derive(Parser, Debug, Clone)]
#[command(
    name = "denosync",
    version,
    about = "Sync Deno import map versions with package.json declarations"
)]
pub struct CliArgs {
    /// Path to the Deno import map document
    #[arg(short = 'i', long = "import-map", default_value = "./deno.json")]
    pub import_map: PathBuf,

    /// Path to the package manifest
    #[arg(short = 'p', long = "package", default_value = "./package.json")]
    pub package: PathBuf,

    /// How many version segments to keep when rewriting (auto, major, minor, full)
    #[arg(long, default_value = "auto", value_parser = parse_precision)]
    pub precision: Precision,

    /// Dry run mode - show what would be updated without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all console output
    #[arg(short, long)]
    pub quiet: bool,
}
