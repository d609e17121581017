// File: crates/chart-lod/src/error.rs
// Summary: Error type for the fallible edges (optimizer configuration loading and validation).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed optimizer config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid optimizer config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
