//! API route configuration

use axum::{
    routing::get,
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{self, AppState};

/// Build the complete API router
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/info", get(handlers::info))
        .route("/qdrant/connection", get(handlers::qdrant_connection))
        .route(
            "/qdrant/collections",
            get(handlers::list_collections).post(handlers::create_collection),
        )
        .route("/qdrant/status", get(handlers::qdrant_status));

    Router::new()
        .route("/", get(root_handler))
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Root handler
async fn root_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Qdrant Admin API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}
