//! denosync - Sync Deno import map versions with package.json declarations
//!
//! Reads deno.json and package.json, resolves pnpm `catalog:` indirections,
//! and rewrites drifted import specifiers in place.

use clap::Parser;
use denosync::cli::CliArgs;
use denosync::output::TextReporter;
use denosync::sync::{SyncEngine, SyncOptions};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let options = SyncOptions {
        precision: args.precision,
        dry_run: args.dry_run,
    };

    let engine = SyncEngine::new(options);
    let result = engine.sync(&args.import_map, &args.package).await?;

    // Output results
    let reporter = TextReporter::new(args.quiet);
    let mut stdout = io::stdout().lock();
    reporter.report(&result, &args.import_map, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
