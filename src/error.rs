use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::schema::SchemaError;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("could not write report: {0}")]
    Output(#[from] io::Error),
}

impl SetupError {
    /// Every setup failure is fatal and reported the same way.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Schema(_) | Self::Output(_) => 1,
        }
    }
}
