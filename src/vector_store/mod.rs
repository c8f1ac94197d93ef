//! Vector-store management facade over Qdrant

pub mod facade;
pub mod models;

pub use facade::QdrantFacade;
pub use models::{
    CollectionDescriptor, CollectionEntry, CollectionSummary, ConnectionState,
    ConnectionStatusReport, CreateOutcome, Distance, ServerSummary, StatusSummary,
};

use crate::error::VectorStoreError;
use async_trait::async_trait;

/// Management operations against a remote vector store.
///
/// Only `list_collections_detailed` can fail; the other operations report
/// failure as data so callers never have to unwind.
#[async_trait]
pub trait VectorStoreAdmin: Send + Sync {
    /// Check connectivity and gather per-collection counts
    async fn check_connection(&self) -> ConnectionStatusReport;

    /// List all collections with per-collection detail. The outer listing
    /// failure propagates; a single collection's detail failure degrades
    /// that entry only.
    async fn list_collections_detailed(
        &self,
    ) -> std::result::Result<Vec<CollectionEntry>, VectorStoreError>;

    /// Create a collection with the given dimensionality and distance metric
    async fn create_collection(&self, descriptor: &CollectionDescriptor) -> CreateOutcome;

    /// Cheapest possible status check: one listing call, no aggregation
    async fn quick_status(&self) -> StatusSummary;

    /// Endpoint descriptor echoed back in API responses
    fn connection_string(&self) -> String;
}
