use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::save::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Clients get no differentiation beyond the message: every variant is a
/// 500 with `{ "success": false, "error": ... }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("{0}")]
    Validation(String),

    #[error("Enhancement error: {0}")]
    Enhancement(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::MalformedBody(_) => "MALFORMED_BODY",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Enhancement(_) => "ENHANCEMENT_ERROR",
            AppError::Store(_) => "STORE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!(code = self.code(), "Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
            other => {
                tracing::error!(code = other.code(), "{other}");
                other.to_string()
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
