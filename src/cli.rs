use std::path::PathBuf;

use clap::Parser;

use crate::schema::DEFAULT_SCHEMA_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "supabase-setup",
    version,
    about = "Check Supabase credentials and print how to apply the local schema"
)]
pub struct Args {
    /// SQL schema file to report on
    #[arg(long, default_value = DEFAULT_SCHEMA_PATH)]
    pub schema: PathBuf,

    /// Load this env file instead of searching for .env
    #[arg(long)]
    pub env_file: Option<PathBuf>,
}
