use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use movies_core::error::CoreError;
use movies_core::validation::{FieldViolation, SchemaError};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `movies_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A create body that failed validation (422 rather than 400).
    #[error("Unprocessable entity: {} issue(s)", .0.len())]
    Unprocessable(Vec<FieldViolation>),

    /// A request body that is not valid JSON.
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map a failed create validation to 422.
    pub fn unprocessable(err: SchemaError) -> Self {
        AppError::Unprocessable(err.issues)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, issues) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                    None,
                ),
                CoreError::Validation(issues) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Validation failed".to_string(),
                    Some(issues),
                ),
            },

            // --- HTTP-specific errors ---
            AppError::Unprocessable(issues) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                "Validation failed".to_string(),
                Some(issues),
            ),
            AppError::InvalidJson(msg) => (
                StatusCode::BAD_REQUEST,
                "INVALID_JSON",
                format!("Invalid JSON body: {msg}"),
                None,
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(issues) = issues {
            body["issues"] = json!(issues);
        }

        (status, axum::Json(body)).into_response()
    }
}
