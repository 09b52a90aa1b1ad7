//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the storage layer.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the store.
    #[error("failed to open store: {0}")]
    Open(String),

    /// A key was rejected before touching the store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Failed to serialize or deserialize a value.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
