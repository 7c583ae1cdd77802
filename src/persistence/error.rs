use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the key-value storage bridge.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage entry '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write storage entry '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
