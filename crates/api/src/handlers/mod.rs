//! Request handlers.
//!
//! Each module pairs the operations (plain async functions over the pool,
//! returning [`AppResult`](crate::error::AppResult)) with thin Axum handlers
//! that extract the request and wrap the result in the response envelope.

pub mod node;
pub mod note;
pub mod project;
pub mod prompt;
pub mod tree;

use prompt_explorer_core::error::CoreError;
use prompt_explorer_core::types::DbId;

use crate::error::AppError;

/// Wrap a validator message as an invalid-argument error.
pub(crate) fn invalid(msg: String) -> AppError {
    AppError::Core(CoreError::Validation(msg))
}

/// Error for a prompt id with no row behind it.
pub(crate) fn prompt_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Prompt",
        id,
    })
}
