//! Note model.

use serde::Serialize;
use sqlx::FromRow;
use prompt_explorer_core::types::{DbId, Timestamp};

/// A row from the `notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub prompt_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new note. The timestamp is assigned on insert.
#[derive(Debug, Clone)]
pub struct CreateNote {
    pub prompt_id: DbId,
    pub content: String,
}
