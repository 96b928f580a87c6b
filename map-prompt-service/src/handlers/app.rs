use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Service name and version
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name and version")
    ),
    tag = "Service"
)]
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Map Prompt Builder API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Service health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy")
    ),
    tag = "Observability"
)]
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "map-prompt-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
