//! Human-readable status output.

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

pub const DASHBOARD_URL: &str = "https://app.supabase.com/";
pub const CLI_PUSH_COMMAND: &str = "supabase db push";

pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn connected(&mut self, url: &str) -> io::Result<()> {
        writeln!(self.out, "✓ Connecting to Supabase: {url}")
    }

    pub fn schema_loaded(&mut self) -> io::Result<()> {
        writeln!(self.out, "✓ Schema loaded")
    }

    pub fn line_count(&mut self, lines: usize) -> io::Result<()> {
        writeln!(self.out, "✓ Line count: {lines}")
    }

    /// The schema has to be pasted into the dashboard by hand; the client
    /// library has no way to run raw SQL.
    pub fn manual_instructions(&mut self, schema_path: &Path) -> io::Result<()> {
        write!(self.out, "{}", instructions(schema_path))
    }

    pub fn done(&mut self) -> io::Result<()> {
        writeln!(self.out, "✓ Ready!")?;
        self.out.flush()
    }

    pub fn error(&mut self, err: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "❌ Error: {err}")?;
        self.out.flush()
    }
}

/// The fixed warning block, naming the schema file to copy.
pub fn instructions(schema_path: &Path) -> String {
    format!(
        "
⚠️  Warning: the schema cannot be applied automatically from here.
Apply it manually through the Supabase Dashboard:

1. Go to: {DASHBOARD_URL}
2. Open your project
3. Go to: SQL Editor → New Query
4. Copy the contents of {}
5. Click: Run

Or use the command line:
$ {CLI_PUSH_COMMAND}


",
        schema_path.display()
    )
}
