//! Route definitions for the `/prompts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{node, note, prompt};
use crate::state::AppState;

/// Routes mounted at `/prompts`.
///
/// ```text
/// GET    /{id}            -> get_by_id
/// POST   /{id}            -> create (child of {id})
/// GET    /{id}/nodes      -> list_by_prompt
/// POST   /{id}/nodes      -> create
/// GET    /{id}/notes      -> list_by_prompt
/// POST   /{id}/notes      -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(prompt::get_by_id).post(prompt::create))
        .route("/{id}/nodes", get(node::list_by_prompt).post(node::create))
        .route("/{id}/notes", get(note::list_by_prompt).post(note::create))
}
