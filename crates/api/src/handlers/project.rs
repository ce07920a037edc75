//! Handlers for listing projects.

use axum::extract::State;
use prompt_explorer_core::types::DbId;
use prompt_explorer_db::repositories::ProjectRepo;
use prompt_explorer_db::DbPool;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project_id: DbId,
    pub name: String,
}

#[derive(Debug, Default, Serialize)]
pub struct ProjectsBody {
    pub projects: Vec<ProjectSummary>,
}

pub async fn list_projects(pool: &DbPool) -> AppResult<ProjectsBody> {
    let projects = ProjectRepo::list(pool)
        .await?
        .into_iter()
        .map(|p| ProjectSummary {
            project_id: p.id,
            name: p.name,
        })
        .collect();
    Ok(ProjectsBody { projects })
}

/// GET /projects
pub async fn list(State(state): State<AppState>) -> ApiResponse<ProjectsBody> {
    ApiResponse(list_projects(&state.pool).await)
}
