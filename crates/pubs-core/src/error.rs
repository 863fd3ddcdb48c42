//! Error types for publication generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a generation run
#[derive(Debug, Error)]
pub enum PubsError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl PubsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PubsError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for generation operations
pub type PubsResult<T> = Result<T, PubsError>;
