use anyhow::Context;
use axum::{extract::State, Json};
use service_core::error::{AppError, ErrorResponse};

use crate::models::IpResponse;
use crate::services::{record_ip_lookup, IpLookupError};
use crate::startup::AppState;

/// Public IP address as reported by the IP-echo service.
#[utoipa::path(
    get,
    path = "/ip",
    responses(
        (status = 200, description = "Upstream response text", body = IpResponse),
        (status = 500, description = "IP lookup failed", body = ErrorResponse)
    ),
    tag = "Utilities"
)]
#[tracing::instrument(skip(state))]
pub async fn get_current_ip(State(state): State<AppState>) -> Result<Json<IpResponse>, AppError> {
    let ip = lookup_ip(&state).await.context("Failed to get IP")?;
    Ok(Json(IpResponse { ip }))
}

/// Single upstream lookup, logged and counted. Shared with `/demo`.
pub(crate) async fn lookup_ip(state: &AppState) -> Result<String, IpLookupError> {
    match state.ip_lookup.current_ip().await {
        Ok(ip) => {
            record_ip_lookup("success");
            Ok(ip)
        }
        Err(e) => {
            record_ip_lookup("failure");
            tracing::error!(error = %e, "IP lookup failed");
            Err(e)
        }
    }
}
