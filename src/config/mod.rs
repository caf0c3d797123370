//! Supabase credentials loaded from the process environment.
//!
//! A `.env` file is loaded first (see [`load_dotenv`]); variables already
//! present in the environment win over the file.

use std::env;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable names.
pub const ENV_SUPABASE_URL: &str = "VITE_SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "VITE_SUPABASE_ANON_KEY";

/// Credentials for the hosted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    supabase_url: String,
    supabase_anon_key: String,
}

impl Config {
    pub fn new(supabase_url: impl Into<String>, supabase_anon_key: impl Into<String>) -> Self {
        Self {
            supabase_url: supabase_url.into(),
            supabase_anon_key: supabase_anon_key.into(),
        }
    }

    /// Read both values from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read both values through `lookup`. Unset and empty values are both
    /// reported as missing, and every missing name is collected before failing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str, missing: &mut Vec<&'static str>| {
            match lookup(name).filter(|v| !v.is_empty()) {
                Some(v) => v,
                None => {
                    missing.push(name);
                    String::new()
                }
            }
        };

        let mut missing = Vec::new();
        let supabase_url = read(ENV_SUPABASE_URL, &mut missing);
        let supabase_anon_key = read(ENV_SUPABASE_ANON_KEY, &mut missing);

        if !missing.is_empty() {
            return Err(ConfigError::Missing { vars: missing });
        }

        let config = Self::new(supabase_url, supabase_anon_key);
        debug!(
            url = %config.supabase_url,
            anon_key = %config.anon_key_preview(),
            "loaded supabase configuration"
        );
        Ok(config)
    }

    /// Project endpoint, e.g. `https://xyz.supabase.co`.
    pub fn supabase_url(&self) -> &str {
        &self.supabase_url
    }

    /// First few characters of the key, safe to put in logs.
    pub fn anon_key_preview(&self) -> String {
        let head: String = self.supabase_anon_key.chars().take(5).collect();
        format!("{head}…")
    }
}

/// Load a `.env` file into the process environment and return its path.
///
/// With an explicit path the file must exist. Without one, the working
/// directory and its ancestors are searched and a missing file is ignored.
/// Lines that fail to parse are skipped with a warning; the rest still load.
/// Variables already set in the process environment are left alone.
pub fn load_dotenv(explicit: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    match explicit {
        Some(path) => {
            let iter = dotenvy::from_path_iter(path).map_err(|source| ConfigError::EnvFile {
                path: path.to_path_buf(),
                source,
            })?;
            apply(path, iter);
            Ok(Some(path.to_path_buf()))
        }
        None => {
            let Some(path) = find_dotenv() else {
                debug!("no .env file found");
                return Ok(None);
            };
            match dotenvy::from_path_iter(&path) {
                Ok(iter) => {
                    apply(&path, iter);
                    Ok(Some(path))
                }
                Err(e) => {
                    warn!("no .env file loaded: {}: {}", path.display(), e);
                    Ok(None)
                }
            }
        }
    }
}

/// Nearest `.env` in the working directory or one of its ancestors.
fn find_dotenv() -> Option<PathBuf> {
    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            warn!("no .env file loaded: cannot read working directory: {}", e);
            return None;
        }
    };
    cwd.ancestors()
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())
}

fn apply<R: Read>(path: &Path, iter: dotenvy::Iter<R>) {
    for item in iter {
        match item {
            Ok((key, value)) => {
                if env::var_os(&key).is_none() {
                    // SAFETY: runs once at startup, before anything else reads
                    // the environment from another thread.
                    unsafe {
                        env::set_var(&key, value);
                    }
                }
            }
            Err(e) => warn!("skipping line in {}: {}", path.display(), e),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Supabase variables are missing from the environment or .env: {}", vars.join(", "))]
    Missing { vars: Vec<&'static str> },

    #[error("could not load env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn loads_when_both_present() {
        let cfg = Config::from_lookup(lookup(&[
            (ENV_SUPABASE_URL, "https://abc.supabase.co"),
            (ENV_SUPABASE_ANON_KEY, "eyJhbGciOi"),
        ]))
        .unwrap();
        assert_eq!(cfg, Config::new("https://abc.supabase.co", "eyJhbGciOi"));
    }

    #[test]
    fn missing_key_is_reported() {
        let err = Config::from_lookup(lookup(&[(ENV_SUPABASE_URL, "https://abc.supabase.co")]))
            .unwrap_err();
        match err {
            ConfigError::Missing { vars } => assert_eq!(vars, vec![ENV_SUPABASE_ANON_KEY]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn both_missing_are_listed() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(ENV_SUPABASE_URL));
        assert!(msg.contains(ENV_SUPABASE_ANON_KEY));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[
            (ENV_SUPABASE_URL, ""),
            (ENV_SUPABASE_ANON_KEY, "key"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing { ref vars } if vars == &[ENV_SUPABASE_URL]));
    }

    #[test]
    fn key_preview_hides_the_rest() {
        let cfg = Config::new("https://abc.supabase.co", "eyJhbGciOiJIUzI1NiJ9");
        assert_eq!(cfg.anon_key_preview(), "eyJhb…");

        let short = Config::new("https://abc.supabase.co", "ab");
        assert_eq!(short.anon_key_preview(), "ab…");
    }

    #[test]
    fn explicit_env_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.env");
        let err = load_dotenv(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFile { .. }));
        assert!(err.to_string().contains("absent.env"));
    }
}
