//! Handlers for prompt notes.

use axum::extract::State;
use prompt_explorer_core::types::{DbId, Timestamp};
use prompt_explorer_core::validation::{require_text, MAX_TEXT_LENGTH};
use prompt_explorer_db::models::note::CreateNote;
use prompt_explorer_db::repositories::{NoteRepo, PromptRepo};
use prompt_explorer_db::DbPool;
use serde::{Deserialize, Serialize};

use super::{invalid, prompt_not_found};
use crate::error::AppResult;
use crate::extract::{IdPath, JsonBody};
use crate::response::{ApiResponse, CreatedBody};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteItem {
    pub note_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Default, Serialize)]
pub struct NotesBody {
    pub notes: Vec<NoteItem>,
}

/// Request body for `POST /prompts/{id}/notes`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateNoteRequest {
    pub content: Option<String>,
}

/// Notes of a prompt, newest first.
pub async fn list_prompt_notes(pool: &DbPool, prompt_id: DbId) -> AppResult<NotesBody> {
    if !PromptRepo::exists(pool, prompt_id).await? {
        return Err(prompt_not_found(prompt_id));
    }

    let notes = NoteRepo::list_by_prompt(pool, prompt_id)
        .await?
        .into_iter()
        .map(|n| NoteItem {
            note_id: n.id,
            content: n.content,
            created_at: n.created_at,
        })
        .collect();

    Ok(NotesBody { notes })
}

pub async fn add_prompt_note(
    pool: &DbPool,
    prompt_id: DbId,
    input: &CreateNoteRequest,
) -> AppResult<CreatedBody> {
    let content =
        require_text("content", input.content.as_deref(), MAX_TEXT_LENGTH).map_err(invalid)?;

    let mut tx = prompt_explorer_db::begin_write(pool).await?;

    if !PromptRepo::exists(&mut *tx, prompt_id).await? {
        return Err(prompt_not_found(prompt_id));
    }

    let note = NoteRepo::create(&mut *tx, &CreateNote { prompt_id, content }).await?;

    tx.commit().await?;

    tracing::info!(note_id = note.id, prompt_id, "Note created");

    Ok(CreatedBody { id: Some(note.id) })
}

/// GET /prompts/{id}/notes
pub async fn list_by_prompt(
    State(state): State<AppState>,
    IdPath(prompt_id): IdPath,
) -> ApiResponse<NotesBody> {
    ApiResponse(list_prompt_notes(&state.pool, prompt_id).await)
}

/// POST /prompts/{id}/notes
pub async fn create(
    State(state): State<AppState>,
    IdPath(prompt_id): IdPath,
    JsonBody(input): JsonBody<CreateNoteRequest>,
) -> ApiResponse<CreatedBody> {
    ApiResponse(add_prompt_note(&state.pool, prompt_id, &input).await)
}
