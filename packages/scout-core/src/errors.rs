//! Error types for scout-core
//!
//! Provides unified error handling across the crate. Scanners and the
//! aggregator never surface these to their callers; they show up on the
//! catalog, configuration and workspace paths.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for scout-core operations
#[derive(Debug, Error)]
pub enum ScoutError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog source error (bad status, unexpected body)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Cache storage error
    #[error("Storage error: {0}")]
    Storage(#[from] scout_storage::StorageError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScoutError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        ScoutError::Catalog(msg.into())
    }
}

/// Result type alias for scout operations
pub type ScoutResult<T> = std::result::Result<T, ScoutError>;
