//! API error types and HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use warden_core::error::CoreError;

/// API-level error that converts into an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, code) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} '{key}' not found"),
                    "NOT_FOUND",
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, msg.clone(), "VALIDATION_ERROR")
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone(), "CONFLICT"),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, msg.clone(), "UNAUTHORIZED")
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone(), "FORBIDDEN"),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                        "INTERNAL_ERROR",
                    )
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_ERROR",
                )
            }
        };

        (status, Json(json!({ "error": message, "code": code }))).into_response()
    }
}

/// Classify database errors into client-facing responses.
///
/// Unique violations on `uq_`-prefixed constraints map to 409 Conflict.
/// Everything else (including the session digest uniqueness constraint) is
/// a sanitized 500; details go to the log, never to the client.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String, &'static str) {
    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            if let Some(constraint) = db_err.constraint() {
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "A record with these values already exists".to_string(),
                        "CONFLICT",
                    );
                }
            }
        }
    }

    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
        "INTERNAL_ERROR",
    )
}
