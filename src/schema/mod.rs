//! Local SQL schema file. The contents are only measured, never parsed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

pub const DEFAULT_SCHEMA_PATH: &str = "supabase_schema.sql";

#[derive(Debug, Clone)]
pub struct SchemaFile {
    path: PathBuf,
    contents: String,
}

impl SchemaFile {
    /// Read the whole file as UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SchemaError::Missing {
                path: path.to_path_buf(),
            },
            _ => SchemaError::Unreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let schema = Self {
            path: path.to_path_buf(),
            contents,
        };
        info!(
            "read schema {} ({} bytes, {} lines)",
            schema.path.display(),
            schema.contents.len(),
            schema.line_count()
        );
        Ok(schema)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines, with `\n` or `\r\n` as terminator. A final
    /// terminator does not open a new line, so `""` is 0 and `"a\n"` is 1.
    /// A lone `\r` (or form feed, `\u{2028}` and the like) is not a line break.
    pub fn line_count(&self) -> usize {
        self.contents.lines().count()
    }
}

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("schema file {} does not exist", path.display())]
    Missing { path: PathBuf },

    #[error("schema file {} could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
