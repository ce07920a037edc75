//! Shared response envelope types for API handlers.
//!
//! Every response is a flat JSON object: the payload fields followed by
//! `errorCode` and `errorMessage`. On success `errorCode` is 200 and
//! `errorMessage` is null. On failure the payload fields are still present
//! in their empty form (null scalars, empty lists) so clients can read the
//! same shape either way.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prompt_explorer_core::types::DbId;
use serde::Serialize;

use crate::error::AppResult;

/// Standard `{ ...body, errorCode, errorMessage }` envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T: Serialize> {
    #[serde(flatten)]
    pub body: T,
    pub error_code: Option<u16>,
    pub error_message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(body: T) -> Self {
        Self {
            body,
            error_code: Some(StatusCode::OK.as_u16()),
            error_message: None,
        }
    }

    pub fn failure(body: T, status: StatusCode, message: String) -> Self {
        Self {
            body,
            error_code: Some(status.as_u16()),
            error_message: Some(message),
        }
    }
}

/// Payload for errors raised before a handler knows its body type.
#[derive(Debug, Default, Serialize)]
pub struct NoBody {}

/// Bare failure envelope for a status raised outside any handler, such as an
/// unmatched route or a timeout. The message is the status's reason phrase.
pub fn status_response(status: StatusCode) -> Response {
    let message = status.canonical_reason().unwrap_or("Error").to_string();
    (status, axum::Json(Envelope::failure(NoBody {}, status, message))).into_response()
}

/// `{ "id": ... }` payload returned by the create operations.
#[derive(Debug, Default, Serialize)]
pub struct CreatedBody {
    pub id: Option<DbId>,
}

/// Handler return type: renders an [`AppResult`] as an [`Envelope`].
///
/// On error the body is `T::default()`, so every field of the success shape
/// is still present.
///
/// # Example
///
/// ```ignore
/// pub async fn get_by_id(...) -> ApiResponse<PromptBody> {
///     ApiResponse(fetch_prompt(&state.pool, id).await)
/// }
/// ```
#[derive(Debug)]
pub struct ApiResponse<T>(pub AppResult<T>);

impl<T: Serialize + Default> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self.0 {
            Ok(body) => (StatusCode::OK, axum::Json(Envelope::success(body))).into_response(),
            Err(err) => {
                let (status, message) = err.status_and_message();
                (
                    status,
                    axum::Json(Envelope::failure(T::default(), status, message)),
                )
                    .into_response()
            }
        }
    }
}
