//! Observability HTTP Routes
//!
//! Health check and metrics endpoints.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::observability::MetricsSnapshot;

use super::errors::{ApiError, ApiResult};
use super::state::SharedState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub songs: i64,
}

/// Create observability routes
pub fn observability_routes(state: SharedState) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Health check route, served at the root
pub fn health_routes(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check handler. Fails with 500 when the store cannot be queried.
async fn health_handler(State(state): State<SharedState>) -> ApiResult<Json<HealthResponse>> {
    let result = state.store.count().await.map_err(ApiError::from);
    let songs = state.record(result)?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        songs,
    }))
}

async fn metrics_handler(State(state): State<SharedState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
