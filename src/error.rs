//! Error types for catalog loading and configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate command id '{0}'")]
    DuplicateId(String),

    #[error("command id must not be empty")]
    EmptyId,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("fuzzy threshold must be a number in (0, 1], got '{0}'")]
    InvalidThreshold(String),
}
