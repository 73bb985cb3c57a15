//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to perform store operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),

    /// Key cannot be used by this backend.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Filesystem error in the file backend.
    #[error("I/O error on key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}
