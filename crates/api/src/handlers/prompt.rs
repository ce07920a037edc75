//! Handlers for reading and chaining prompts.

use axum::extract::State;
use prompt_explorer_core::error::CoreError;
use prompt_explorer_core::types::DbId;
use prompt_explorer_core::validation::{
    require_text, validate_parent_id, MAX_TEXT_LENGTH, MAX_TITLE_LENGTH,
};
use prompt_explorer_db::models::prompt::CreatePrompt;
use prompt_explorer_db::repositories::PromptRepo;
use prompt_explorer_db::DbPool;
use serde::{Deserialize, Serialize};

use super::{invalid, prompt_not_found};
use crate::error::{is_chain_violation, AppError, AppResult};
use crate::extract::{IdPath, JsonBody};
use crate::response::{ApiResponse, CreatedBody};
use crate::state::AppState;

/// A single prompt's details.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub parent_prompt_id: Option<DbId>,
    pub project_id: Option<DbId>,
}

/// Request body for `POST /prompts/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePromptRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

pub async fn fetch_prompt(pool: &DbPool, id: DbId) -> AppResult<PromptBody> {
    let prompt = PromptRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| prompt_not_found(id))?;

    Ok(PromptBody {
        title: Some(prompt.title),
        description: prompt.description,
        parent_prompt_id: prompt.parent_prompt_id,
        project_id: Some(prompt.project_id),
    })
}

/// Chain a new prompt directly under `parent_id`.
///
/// The new prompt joins the parent's project. A parent that already has a
/// child is rejected, keeping each project's prompts a single chain. The
/// check and the insert share one `BEGIN IMMEDIATE` transaction, so
/// concurrent requests for the same parent are decided one at a time.
pub async fn add_prompt(
    pool: &DbPool,
    parent_id: DbId,
    input: &CreatePromptRequest,
) -> AppResult<CreatedBody> {
    validate_parent_id(parent_id).map_err(invalid)?;
    let title = require_text("title", input.title.as_deref(), MAX_TITLE_LENGTH).map_err(invalid)?;
    let description = require_text("description", input.description.as_deref(), MAX_TEXT_LENGTH)
        .map_err(invalid)?;

    let mut tx = prompt_explorer_db::begin_write(pool).await?;

    let parent = PromptRepo::find_by_id(&mut *tx, parent_id)
        .await?
        .ok_or_else(|| prompt_not_found(parent_id))?;

    if PromptRepo::find_child(&mut *tx, parent_id).await?.is_some() {
        return Err(AppError::Core(CoreError::ChainConflict { parent_id }));
    }

    let prompt = PromptRepo::create(
        &mut *tx,
        &CreatePrompt {
            project_id: parent.project_id,
            parent_prompt_id: Some(parent_id),
            title,
            description: Some(description),
        },
    )
    .await
    .map_err(|err| {
        // The write lock orders handlers; the index catches writers that skip the check.
        if is_chain_violation(&err) {
            AppError::Core(CoreError::ChainConflict { parent_id })
        } else {
            AppError::Database(err)
        }
    })?;

    tx.commit().await?;

    tracing::info!(
        prompt_id = prompt.id,
        parent_prompt_id = parent_id,
        project_id = prompt.project_id,
        "Prompt created"
    );

    Ok(CreatedBody {
        id: Some(prompt.id),
    })
}

/// GET /prompts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResponse<PromptBody> {
    ApiResponse(fetch_prompt(&state.pool, id).await)
}

/// POST /prompts/{id}
///
/// `{id}` is the parent prompt.
pub async fn create(
    State(state): State<AppState>,
    IdPath(parent_id): IdPath,
    JsonBody(input): JsonBody<CreatePromptRequest>,
) -> ApiResponse<CreatedBody> {
    ApiResponse(add_prompt(&state.pool, parent_id, &input).await)
}
