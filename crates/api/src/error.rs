use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prompt_explorer_core::error::CoreError;
use sqlx::error::ErrorKind;

use crate::response::{Envelope, NoBody};

/// Message returned for every 500, whatever the underlying cause.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the standard envelope with
/// `errorCode` / `errorMessage` set.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `prompt_explorer_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status and client-facing message for this error.
    ///
    /// Internal failures are logged here with their real cause and reported
    /// to the client as [`INTERNAL_ERROR_MESSAGE`].
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::ProjectMissing => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::ChainConflict { .. } => (StatusCode::BAD_REQUEST, core.to_string()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, axum::Json(Envelope::failure(NoBody {}, status, message))).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_ERROR_MESSAGE.to_string(),
    )
}

/// Whether a sqlx error is the chain index rejecting a second child.
pub fn is_chain_violation(err: &sqlx::Error) -> bool {
    err.as_database_error().is_some_and(|db_err| {
        db_err.kind() == ErrorKind::UniqueViolation
            && db_err.message().contains("prompts.parent_prompt_id")
    })
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - A unique violation on the prompt chain index maps to 400.
/// - Foreign key violations map to 404 (the referenced row is gone).
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        sqlx::Error::Database(db_err) => {
            if is_chain_violation(err) {
                return (
                    StatusCode::BAD_REQUEST,
                    "Parent prompt already has a child prompt".to_string(),
                );
            }
            if db_err.kind() == ErrorKind::ForeignKeyViolation {
                return (
                    StatusCode::NOT_FOUND,
                    "Referenced resource not found".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
