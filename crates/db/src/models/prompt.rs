//! Prompt model.

use serde::Serialize;
use sqlx::FromRow;
use prompt_explorer_core::types::DbId;

/// A row from the `prompts` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Prompt {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub parent_prompt_id: Option<DbId>,
    pub project_id: DbId,
}

/// DTO for creating a new prompt.
///
/// `parent_prompt_id` is `None` only for the root of a chain.
#[derive(Debug, Clone)]
pub struct CreatePrompt {
    pub project_id: DbId,
    pub parent_prompt_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
}
