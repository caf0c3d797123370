use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use supabase_setup::{cli::Args, report::Reporter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Initialize tracing; logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Parse command line
    let args = Args::parse();
    let mut reporter = Reporter::new(io::stdout().lock());

    // Load configuration, read the schema and print the report
    match supabase_setup::run(&args, &mut reporter) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::error!("setup failed: {}", e);
            reporter.error(&e)?;
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
