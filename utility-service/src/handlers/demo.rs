use anyhow::Context;
use axum::{extract::State, Json};
use secrecy::{ExposeSecret, Secret};
use service_core::error::{AppError, ErrorResponse};

use super::ip::lookup_ip;
use crate::models::DemoResponse;
use crate::services::{get_env_var, increment};
use crate::startup::AppState;

/// Sentinel reported when the secret variable is unset.
pub const NOT_SET: &str = "not_set";

/// Run every utility once: `increment(1)`, the IP lookup and a preview of the
/// configured secret variable.
#[utoipa::path(
    get,
    path = "/demo",
    responses(
        (status = 200, description = "Output of every utility", body = DemoResponse),
        (status = 500, description = "One of the utilities failed", body = ErrorResponse)
    ),
    tag = "Utilities"
)]
#[tracing::instrument(skip(state))]
pub async fn demo_all_functions(
    State(state): State<AppState>,
) -> Result<Json<DemoResponse>, AppError> {
    match run_demo(&state).await.context("Demo failed") {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "Demo failed");
            Err(AppError::InternalError(e))
        }
    }
}

async fn run_demo(state: &AppState) -> anyhow::Result<DemoResponse> {
    let math_result = increment(1)?;
    let current_ip = lookup_ip(state).await?;

    let secret = Secret::new(
        get_env_var(&state.demo.secret_var, Some(NOT_SET))?
            .unwrap_or_else(|| NOT_SET.to_string()),
    );

    Ok(DemoResponse {
        message: "Demo of all utility functions".to_string(),
        math_result: format!("increment(1) = {}", math_result),
        current_ip,
        secret_password_preview: secret_preview(&secret),
    })
}

/// First three characters followed by `...`, or the sentinel itself.
pub fn secret_preview(secret: &Secret<String>) -> String {
    let value = secret.expose_secret();
    if value == NOT_SET {
        return NOT_SET.to_string();
    }

    let head: String = value.chars().take(3).collect();
    format!("{}...", head)
}
