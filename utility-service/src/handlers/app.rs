use axum::{http::StatusCode, http::Uri, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

use crate::services::get_metrics;

pub const SERVICE_NAME: &str = "utility-service";

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting")),
    tag = "Observability"
)]
pub async fn index() -> impl IntoResponse {
    Json(json!({ "message": "Hello from utility-service!" }))
}

/// Liveness check.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy")),
    tag = "Observability"
)]
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness check. Nothing to warm up, so always ready.
#[utoipa::path(
    get,
    path = "/ready",
    responses((status = 200, description = "Service is ready")),
    tag = "Observability"
)]
pub async fn readiness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ready" })))
}

/// Prometheus metrics endpoint.
#[utoipa::path(
    get,
    path = "/metrics",
    responses((status = 200, description = "Prometheus text exposition", body = String, content_type = "text/plain")),
    tag = "Observability"
)]
pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
