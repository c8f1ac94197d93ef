//! Qdrant-backed implementation of the management facade

use super::models::{
    CollectionConfigSummary, CollectionDescriptor, CollectionEntry, CollectionSummary,
    ConnectionState, ConnectionStatusReport, CreateOutcome, Distance, ServerSummary,
    StatusSummary,
};
use super::VectorStoreAdmin;
use crate::config::QdrantConfig;
use crate::error::VectorStoreError;
use async_trait::async_trait;
use qdrant_client::qdrant::vectors_config::Config;
use qdrant_client::qdrant::{
    CollectionInfo, CollectionStatus, CreateCollectionBuilder, VectorParamsBuilder,
    VectorsConfig,
};
use qdrant_client::{Qdrant, QdrantError};
use secrecy::ExposeSecret;
use std::time::{Duration, Instant};
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

/// Facade over the Qdrant client.
///
/// Owns the one connection handle for the process. The handle is built
/// lazily on first use and shared by every operation; `OnceCell` keeps a
/// racing pair of first requests from building it twice.
pub struct QdrantFacade {
    config: QdrantConfig,
    client: OnceCell<Qdrant>,
}

impl QdrantFacade {
    pub fn new(config: QdrantConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    /// Get or create the shared Qdrant handle
    async fn client(&self) -> Result<&Qdrant, VectorStoreError> {
        self.client
            .get_or_try_init(|| async {
                let mut builder = Qdrant::from_url(&self.config.url)
                    .timeout(Duration::from_secs(self.config.timeout_secs));
                if let Some(key) = &self.config.api_key {
                    builder = builder.api_key(key.expose_secret().clone());
                }

                let client = builder
                    .build()
                    .map_err(|e| VectorStoreError::Network(e.to_string()))?;
                info!("Qdrant client created: {}", self.config.url);
                Ok(client)
            })
            .await
    }
}

/// Map a Qdrant client error into the closed facade taxonomy.
///
/// tonic folds transport-level failures (connection refused, timed out)
/// into a response status instead of a distinct error variant, so the
/// status text is the only place they can be told apart.
fn classify(err: QdrantError) -> VectorStoreError {
    match err {
        QdrantError::ResponseError { status } => {
            let message = status.to_string();
            if message.contains("Unavailable") || message.contains("DeadlineExceeded") {
                VectorStoreError::Network(message)
            } else {
                VectorStoreError::Protocol(message)
            }
        }
        other => VectorStoreError::Unexpected(other.to_string()),
    }
}

/// Round a latency to two decimal places
fn round_ms(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}

fn to_qdrant_distance(distance: Distance) -> qdrant_client::qdrant::Distance {
    match distance {
        Distance::Cosine => qdrant_client::qdrant::Distance::Cosine,
        Distance::Euclidean => qdrant_client::qdrant::Distance::Euclid,
        Distance::DotProduct => qdrant_client::qdrant::Distance::Dot,
    }
}

/// Build a listing entry from a collection-info response
fn entry_from_info(name: String, info: Option<CollectionInfo>) -> CollectionEntry {
    let Some(info) = info else {
        return CollectionEntry::Degraded {
            name,
            error: "empty collection info response".to_string(),
        };
    };

    let status = CollectionStatus::try_from(info.status)
        .map(|s| s.as_str_name().to_lowercase())
        .unwrap_or_else(|_| "unknown".to_string());

    let config = info
        .config
        .as_ref()
        .and_then(|c| c.params.as_ref())
        .and_then(|p| p.vectors_config.as_ref())
        .and_then(|v| v.config.as_ref())
        .map(|cfg| match cfg {
            Config::Params(params) => CollectionConfigSummary {
                vector_size: Some(params.size),
                distance: qdrant_client::qdrant::Distance::try_from(params.distance)
                    .ok()
                    .map(|d| d.as_str_name().to_string()),
            },
            // Named-vector collections carry a map of params; this service
            // only reads back the single-vector layout it creates.
            Config::ParamsMap(_) => CollectionConfigSummary {
                vector_size: None,
                distance: None,
            },
        });

    CollectionEntry::Detail {
        name,
        vectors_count: info.vectors_count,
        points_count: info.points_count,
        config,
        status,
    }
}

#[async_trait]
impl VectorStoreAdmin for QdrantFacade {
    async fn check_connection(&self) -> ConnectionStatusReport {
        let mut report = ConnectionStatusReport::disconnected(self.connection_string());
        let start = Instant::now();

        let client = match self.client().await {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to create Qdrant client: {}", e);
                report.error = Some(e.to_string());
                return report;
            }
        };

        let listing = match client.list_collections().await {
            Ok(listing) => listing,
            Err(e) => {
                let err = classify(e);
                error!("Qdrant connection check failed: {}", err);
                report.error = Some(err.to_string());
                return report;
            }
        };

        // Latency covers the listing round trip only, not the per-collection
        // count fetches below.
        let response_time = start.elapsed().as_secs_f64() * 1000.0;
        report.response_time_ms = Some(round_ms(response_time));

        // The listing only carries names; counts come from best-effort
        // per-collection info calls. A failed call contributes zeros.
        let mut collections = Vec::with_capacity(listing.collections.len());
        for description in listing.collections {
            let name = description.name;
            let (vectors_count, points_count) = match client.collection_info(name.clone()).await
            {
                Ok(response) => response
                    .result
                    .map(|info| {
                        (
                            info.vectors_count.unwrap_or(0),
                            info.points_count.unwrap_or(0),
                        )
                    })
                    .unwrap_or((0, 0)),
                Err(e) => {
                    warn!("Could not get counts for collection {}: {}", name, classify(e));
                    (0, 0)
                }
            };
            collections.push(CollectionSummary {
                name,
                vectors_count,
                points_count,
            });
        }

        report.status = ConnectionState::Connected;
        report.server_info = Some(ServerSummary {
            collections_count: collections.len(),
            total_vectors: collections.iter().map(|c| c.vectors_count).sum(),
            total_points: collections.iter().map(|c| c.points_count).sum(),
        });
        report.collections = collections;

        info!(
            "Qdrant connection successful - {} collections found",
            report.collections.len()
        );
        report
    }

    async fn list_collections_detailed(
        &self,
    ) -> Result<Vec<CollectionEntry>, VectorStoreError> {
        let client = self
            .client()
            .await
            .map_err(|e| VectorStoreError::RemoteUnavailable(e.to_string()))?;

        let listing = client
            .list_collections()
            .await
            .map_err(|e| VectorStoreError::RemoteUnavailable(e.to_string()))?;

        let mut entries = Vec::with_capacity(listing.collections.len());
        for description in listing.collections {
            let name = description.name;
            let entry = match client.collection_info(name.clone()).await {
                Ok(response) => entry_from_info(name, response.result),
                Err(e) => {
                    let err = classify(e);
                    warn!("Could not get detailed info for collection {}: {}", name, err);
                    CollectionEntry::Degraded {
                        name,
                        error: err.to_string(),
                    }
                }
            };
            entries.push(entry);
        }

        debug!("Listed {} collections", entries.len());
        Ok(entries)
    }

    async fn create_collection(&self, descriptor: &CollectionDescriptor) -> CreateOutcome {
        let Some(distance) = Distance::parse(&descriptor.distance) else {
            let message = format!(
                "Failed to create collection '{}': unknown distance metric '{}'",
                descriptor.name, descriptor.distance
            );
            error!("{}", message);
            return CreateOutcome::failed(message);
        };

        let client = match self.client().await {
            Ok(client) => client,
            Err(e) => {
                let message = format!(
                    "Failed to create collection '{}': {}",
                    descriptor.name, e
                );
                error!("{}", message);
                return CreateOutcome::failed(message);
            }
        };

        let vector_params =
            VectorParamsBuilder::new(descriptor.vector_size, to_qdrant_distance(distance))
                .build();

        let request = CreateCollectionBuilder::new(descriptor.name.as_str()).vectors_config(
            VectorsConfig {
                config: Some(Config::Params(vector_params)),
            },
        );

        match client.create_collection(request).await {
            Ok(_) => {
                info!("Created collection: {}", descriptor.name);
                CreateOutcome::created(&descriptor.name, descriptor.vector_size, distance)
            }
            Err(e) => {
                let message = format!(
                    "Failed to create collection '{}': {}",
                    descriptor.name,
                    classify(e)
                );
                error!("{}", message);
                CreateOutcome::failed(message)
            }
        }
    }

    async fn quick_status(&self) -> StatusSummary {
        let connection_string = self.connection_string();

        let result = match self.client().await {
            Ok(client) => client.list_collections().await.map_err(classify),
            Err(e) => Err(e),
        };

        match result {
            Ok(listing) => StatusSummary {
                status: ConnectionState::Connected,
                collections_count: Some(listing.collections.len()),
                error: None,
                connection_string,
                message: "Qdrant is running and accessible".to_string(),
            },
            Err(e) => {
                warn!("Qdrant status check failed: {}", e);
                StatusSummary {
                    status: ConnectionState::Disconnected,
                    collections_count: None,
                    error: Some(e.to_string()),
                    connection_string,
                    message: "Qdrant is not accessible".to_string(),
                }
            }
        }
    }

    fn connection_string(&self) -> String {
        self.config.connection_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_ms_two_decimals() {
        assert_eq!(round_ms(12.3456), 12.35);
        assert_eq!(round_ms(0.004), 0.0);
        assert_eq!(round_ms(100.0), 100.0);
        assert!(round_ms(0.0) >= 0.0);
    }

    #[test]
    fn test_distance_mapping() {
        assert_eq!(
            to_qdrant_distance(Distance::Cosine),
            qdrant_client::qdrant::Distance::Cosine
        );
        assert_eq!(
            to_qdrant_distance(Distance::Euclidean),
            qdrant_client::qdrant::Distance::Euclid
        );
        assert_eq!(
            to_qdrant_distance(Distance::DotProduct),
            qdrant_client::qdrant::Distance::Dot
        );
    }

    #[test]
    fn test_entry_from_missing_info_degrades() {
        let entry = entry_from_info("docs".to_string(), None);
        match entry {
            CollectionEntry::Degraded { name, error } => {
                assert_eq!(name, "docs");
                assert!(!error.is_empty());
            }
            CollectionEntry::Detail { .. } => panic!("expected degraded entry"),
        }
    }

    #[test]
    fn test_entry_from_info_counts_and_status() {
        let info = CollectionInfo {
            status: CollectionStatus::Green as i32,
            vectors_count: Some(12),
            points_count: Some(7),
            ..Default::default()
        };
        match entry_from_info("docs".to_string(), Some(info)) {
            CollectionEntry::Detail {
                name,
                vectors_count,
                points_count,
                config,
                status,
            } => {
                assert_eq!(name, "docs");
                assert_eq!(vectors_count, Some(12));
                assert_eq!(points_count, Some(7));
                assert!(config.is_none());
                assert_eq!(status, "green");
            }
            CollectionEntry::Degraded { .. } => panic!("expected detail entry"),
        }
    }

    #[tokio::test]
    async fn test_create_with_unrecognized_distance_is_reported_not_raised() {
        // No remote involved: the metric cannot be resolved, so the failure
        // is produced before any connection attempt.
        let facade = QdrantFacade::new(QdrantConfig::default());
        let descriptor = CollectionDescriptor {
            name: "docs".to_string(),
            vector_size: 384,
            distance: "Manhattan".to_string(),
        };
        let outcome = facade.create_collection(&descriptor).await;
        assert!(!outcome.is_success());
        let error = outcome.error().expect("failure must carry an error");
        assert!(error.contains("Manhattan"));
    }
}
