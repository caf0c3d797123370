pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod schema;

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::cli::Args;
use crate::config::Config;
use crate::error::SetupError;
use crate::report::Reporter;
use crate::schema::SchemaFile;

/// Load configuration from the environment (after `.env`), then report on the
/// schema file.
pub fn run<W: Write>(args: &Args, reporter: &mut Reporter<W>) -> Result<SchemaFile, SetupError> {
    if let Some(path) = config::load_dotenv(args.env_file.as_deref())? {
        info!("loaded env file {}", path.display());
    }
    let config = Config::from_env()?;
    prepare(&config, &args.schema, reporter)
}

/// Print the connection line, read the schema, and print the manual steps.
/// The schema is not read until the configuration has been confirmed.
pub fn prepare<W: Write>(
    config: &Config,
    schema_path: &Path,
    reporter: &mut Reporter<W>,
) -> Result<SchemaFile, SetupError> {
    reporter.connected(config.supabase_url())?;

    let schema = SchemaFile::load(schema_path)?;
    reporter.schema_loaded()?;
    reporter.line_count(schema.line_count())?;

    info!("schema must be applied manually; no SQL is executed");
    reporter.manual_instructions(schema.path())?;
    reporter.done()?;

    Ok(schema)
}
