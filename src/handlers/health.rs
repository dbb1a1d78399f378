// handlers/health.rs - GET /health handler (public)

use axum::response::Json;
use serde_json::{json, Value};

/// Liveness probe. Does not touch storage and needs no token.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Fallback for paths outside the dispatch table.
pub async fn route_not_found() -> crate::error::ApiError {
    crate::error::ApiError::not_found("Route not found")
}
