use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0:#}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0:#}")]
    NotFound(anyhow::Error),

    #[error("Internal server error: {0:#}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0:#}")]
    ConfigError(anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // `{:#}` renders the whole anyhow context chain, so the detail keeps
        // the underlying failure's message after the handler's prefix.
        let (error, detail) = match self {
            AppError::BadRequest(err) => ("Bad request", format!("{:#}", err)),
            AppError::NotFound(err) => ("Not found", format!("{:#}", err)),
            AppError::InternalError(err) => ("Internal server error", format!("{:#}", err)),
            AppError::ConfigError(err) => ("Configuration error", format!("{:#}", err)),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                detail,
            }),
        )
            .into_response()
    }
}
