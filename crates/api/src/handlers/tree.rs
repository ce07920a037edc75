//! Handlers for the prompt tree view.

use axum::extract::State;
use prompt_explorer_core::chain::chain_order;
use prompt_explorer_core::error::CoreError;
use prompt_explorer_core::types::DbId;
use prompt_explorer_db::repositories::{ProjectRepo, PromptRepo};
use prompt_explorer_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Project details plus its prompt ids in chain order.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeBody {
    pub project: Option<String>,
    pub main_request: Option<String>,
    pub final_integration: Option<String>,
    pub prompts: Vec<DbId>,
}

/// Load the tree of `project_id`, or of the default project when `None`.
pub async fn load_tree(pool: &DbPool, project_id: Option<DbId>) -> AppResult<TreeBody> {
    let project = match project_id {
        Some(id) => ProjectRepo::find_by_id(pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Project",
                id,
            }))?,
        None => ProjectRepo::find_default(pool)
            .await?
            .ok_or(AppError::Core(CoreError::ProjectMissing))?,
    };

    let links = PromptRepo::list_links_by_project(pool, project.id).await?;

    Ok(TreeBody {
        project: Some(project.name),
        main_request: project.main_request,
        final_integration: project.final_integration,
        prompts: chain_order(&links),
    })
}

/// GET /tree
///
/// Tree of the default project.
pub async fn get_tree(State(state): State<AppState>) -> ApiResponse<TreeBody> {
    ApiResponse(load_tree(&state.pool, None).await)
}

/// GET /projects/{id}/tree
pub async fn get_project_tree(
    State(state): State<AppState>,
    IdPath(project_id): IdPath,
) -> ApiResponse<TreeBody> {
    ApiResponse(load_tree(&state.pool, Some(project_id)).await)
}
