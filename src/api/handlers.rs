//! API request handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::vector_store::{CollectionDescriptor, CollectionEntry, VectorStoreAdmin};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn VectorStoreAdmin>,
    pub app: AppConfig,
}

/// Generic error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response for the `/info` endpoint
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub debug: bool,
}

/// Response for the collection listing endpoint
#[derive(Debug, Serialize)]
pub struct CollectionListResponse {
    pub collections: Vec<CollectionEntry>,
    pub total_collections: usize,
    pub connection_string: String,
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "healthy"}))
}

/// API information endpoint
pub async fn info(State(state): State<AppState>) -> impl IntoResponse {
    Json(InfoResponse {
        name: state.app.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: state.app.description.clone(),
        debug: state.app.debug,
    })
}

/// Check vector database connection status.
///
/// The facade reports failure as data, so this handler always answers 200
/// with a report.
pub async fn qdrant_connection(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.store.check_connection().await;
    Json(report)
}

/// Get detailed information about all collections
pub async fn list_collections(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.list_collections_detailed().await {
        Ok(collections) => (
            StatusCode::OK,
            Json(CollectionListResponse {
                total_collections: collections.len(),
                connection_string: state.store.connection_string(),
                collections,
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Failed to get collections: {}", e),
            }),
        )
            .into_response(),
    }
}

/// Create a new collection
pub async fn create_collection(
    State(state): State<AppState>,
    Json(descriptor): Json<CollectionDescriptor>,
) -> impl IntoResponse {
    let outcome = state.store.create_collection(&descriptor).await;
    if outcome.is_success() {
        (StatusCode::OK, Json(outcome)).into_response()
    } else {
        let error = outcome
            .error()
            .unwrap_or("collection creation failed")
            .to_string();
        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
    }
}

/// Quick status check without per-collection detail.
///
/// Answers 200 whether or not the remote is reachable; the body carries the
/// connection state.
pub async fn qdrant_status(State(state): State<AppState>) -> impl IntoResponse {
    let summary = state.store.quick_status().await;
    Json(summary)
}
