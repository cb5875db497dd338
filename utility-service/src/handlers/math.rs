use anyhow::Context;
use axum::{extract::rejection::JsonRejection, Json};
use service_core::error::{AppError, ErrorResponse};

use crate::models::{MathRequest, MathResponse};
use crate::services::{increment, MathError};

/// Increment `x`. A body whose `x` is missing or not an integer is reported
/// like any other math failure, as a 400.
#[utoipa::path(
    post,
    path = "/math",
    request_body = MathRequest,
    responses(
        (status = 200, description = "Successor of the input", body = MathResponse),
        (status = 400, description = "Missing, non-integer or overflowing operand", body = ErrorResponse)
    ),
    tag = "Utilities"
)]
#[tracing::instrument(skip(payload))]
pub async fn do_math(
    payload: Result<Json<MathRequest>, JsonRejection>,
) -> Result<Json<MathResponse>, AppError> {
    let outcome = payload
        .map_err(|rejection| MathError::InvalidOperand(rejection.body_text()))
        .and_then(|Json(request)| {
            increment(request.x).map(|result| MathResponse {
                input: request.x,
                result,
            })
        });

    match outcome.context("Math operation failed") {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::warn!(error = %format!("{:#}", e), "Math request rejected");
            Err(AppError::BadRequest(e))
        }
    }
}
