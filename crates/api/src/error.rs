use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lateshow_core::error::CoreError;
use serde_json::json;

use crate::response::PrettyJson;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the API's JSON error bodies.
/// Single-resource lookups answer `{"error": msg}`; the appearance creation
/// endpoint answers `{"errors": [msg, ...]}`. The asymmetry is part of the
/// published contract.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lateshow_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Missing or dangling episode/guest references on appearance creation.
    /// Carries every applicable message, accumulated rather than
    /// short-circuited.
    #[error("Invalid references: {0:?}")]
    MissingReferences(Vec<String>),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, .. }) => (
                StatusCode::NOT_FOUND,
                PrettyJson(json!({ "error": format!("{entity} not found") })),
            )
                .into_response(),

            AppError::Core(CoreError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                PrettyJson(json!({ "errors": [msg] })),
            )
                .into_response(),

            AppError::MissingReferences(errors) => (
                StatusCode::NOT_FOUND,
                PrettyJson(json!({ "errors": errors })),
            )
                .into_response(),

            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                something_went_wrong()
            }

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                something_went_wrong()
            }
        }
    }
}

/// The unclassified-failure response. Details stay on the server; the
/// client only ever sees the sanitized message.
fn something_went_wrong() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        PrettyJson(json!({ "errors": ["Something went wrong."] })),
    )
        .into_response()
}
