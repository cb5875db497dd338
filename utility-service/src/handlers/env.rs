use anyhow::{anyhow, Context};
use axum::{extract::rejection::JsonRejection, Json};
use service_core::error::{AppError, ErrorResponse};

use crate::models::{EnvVarRequest, EnvVarResponse};
use crate::services::get_env_var;

#[utoipa::path(
    post,
    path = "/env",
    request_body = EnvVarRequest,
    responses(
        (status = 200, description = "Variable value, the default, or null", body = EnvVarResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Variable could not be read", body = ErrorResponse)
    ),
    tag = "Utilities"
)]
#[tracing::instrument(skip(payload))]
pub async fn get_environment_variable(
    payload: Result<Json<EnvVarRequest>, JsonRejection>,
) -> Result<Json<EnvVarResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::BadRequest(anyhow!("Invalid request body: {}", rejection.body_text()))
    })?;

    let value = get_env_var(&request.var_name, request.default.as_deref())
        .context("Failed to get env var")
        .map_err(|e| {
            tracing::error!(
                var_name = %request.var_name,
                error = %format!("{:#}", e),
                "Environment lookup failed"
            );
            AppError::InternalError(e)
        })?;

    Ok(Json(EnvVarResponse {
        var_name: request.var_name,
        value,
    }))
}
