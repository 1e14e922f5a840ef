//! Error types for example sources.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read examples file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid TOML examples: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON examples: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported examples file format: {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
}
