pub mod health;
pub mod project;
pub mod prompt;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tree                           tree of the default project (GET)
///
/// /projects                       list (GET)
/// /projects/{id}/tree             tree of one project (GET)
///
/// /prompts/{id}                   get (GET), chain a child under it (POST)
/// /prompts/{id}/nodes             list, create (GET, POST)
/// /prompts/{id}/notes             list, create (GET, POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/tree", get(handlers::tree::get_tree))
        .nest("/projects", project::router())
        .nest("/prompts", prompt::router())
}
