//! Node model.

use serde::Serialize;
use sqlx::FromRow;
use prompt_explorer_core::types::DbId;

/// A row from the `nodes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Node {
    pub id: DbId,
    pub prompt_id: DbId,
    pub name: String,
    pub action: Option<String>,
}

/// DTO for creating a new node.
#[derive(Debug, Clone)]
pub struct CreateNode {
    pub prompt_id: DbId,
    pub name: String,
    pub action: Option<String>,
}
