use thiserror::Error;

use crate::config::ConfigError;
use crate::fetcher::FetchError;

/// Failures that stop a whole run. Per-item problems never end up here.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("folder not found: {0}")]
    FolderNotFound(String),

    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("http client error: {0}")]
    Http(#[from] FetchError),
}

pub type Result<T> = std::result::Result<T, AppError>;
