use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const URL: &str = "https://abcdefgh.supabase.co";
pub const ANON_KEY: &str = "eyJhbGciOiJIUzI1NiJ9.test";

/// A scratch working directory with an empty `.env`, so the binary never
/// picks up a `.env` from a parent directory.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        fs::write(dir.path().join(".env"), "").expect("write empty .env");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    /// The binary with no Supabase variables inherited from the caller.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("supabase-setup");
        cmd.current_dir(self.path())
            .env_remove("VITE_SUPABASE_URL")
            .env_remove("VITE_SUPABASE_ANON_KEY")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn configured_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("VITE_SUPABASE_URL", URL)
            .env("VITE_SUPABASE_ANON_KEY", ANON_KEY);
        cmd
    }
}
