//! The `error` module defines the error types used within the application.
//!
//! Connectivity problems (broker or store) are never fatal to the process:
//! the ingest path logs and carries on, the HTTP path maps them to an error
//! response. These types exist so every layer can say precisely what failed.

use thiserror::Error;

/// Errors surfaced by the last-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The embedded database rejected a read or write.
    #[error("store backend error: {0}")]
    Backend(#[from] sled::Error),

    /// A stored entry could not be encoded or decoded.
    #[error("stored entry codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// A stored key was not valid UTF-8.
    #[error("stored key is not valid utf-8")]
    InvalidKey,
}

/// Top-level application errors.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
