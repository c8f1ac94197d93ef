//! Qdrant Admin - management HTTP API for a Qdrant vector database
//!
//! This library exposes a small set of management endpoints (connection
//! check, collection listing, collection creation, quick status) over a
//! vector-store facade. The facade owns a single lazily-created Qdrant
//! handle and normalizes both success and failure into plain data, so the
//! HTTP layer only has to serialize.

pub mod api;
pub mod config;
pub mod error;
pub mod vector_store;

pub use config::Config;
pub use error::{AdminError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::api::{build_router, AppState};
    pub use crate::config::Config;
    pub use crate::error::{AdminError, Result, VectorStoreError};
    pub use crate::vector_store::{
        CollectionDescriptor, ConnectionStatusReport, CreateOutcome, QdrantFacade,
        StatusSummary, VectorStoreAdmin,
    };
}
