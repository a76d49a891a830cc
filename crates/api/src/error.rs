use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prism_core::store::StoreError;
use prism_core::validation::FieldErrors;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps store and validation errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The theme store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Editor input failed field validation.
    #[error(transparent)]
    Validation(#[from] FieldErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- Store errors ---
            AppError::Store(StoreError::Unavailable(msg)) => {
                tracing::error!(error = %msg, "Theme store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORE_UNAVAILABLE",
                    "The theme store is unavailable".to_string(),
                )
            }
            AppError::Store(StoreError::Corrupt(msg)) => {
                tracing::error!(error = %msg, "Stored theme record is corrupt");
                internal()
            }

            // --- Field validation carries per-field messages ---
            AppError::Validation(errors) => {
                let body = json!({
                    "error": "Validation failed",
                    "code": "VALIDATION_ERROR",
                    "fields": errors.errors,
                });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
