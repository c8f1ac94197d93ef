//! Error types for the Qdrant admin service

use thiserror::Error;

/// Result type alias for admin service operations
pub type Result<T> = std::result::Result<T, AdminError>;

/// Main error type for the admin service
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Vector store error: {0}")]
    VectorStore(#[from] VectorStoreError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors raised by the vector-store facade.
///
/// Each variant keeps the underlying client message so failures stay
/// inspectable instead of collapsing into one opaque string.
#[derive(Error, Debug)]
pub enum VectorStoreError {
    /// The remote endpoint could not produce the collection listing an
    /// operation depends on. This is the only variant the facade lets
    /// unwind to the transport layer.
    #[error("Qdrant unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Qdrant server error: {0}")]
    Protocol(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<config::ConfigError> for AdminError {
    fn from(err: config::ConfigError) -> Self {
        AdminError::Config(err.to_string())
    }
}
