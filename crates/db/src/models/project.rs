//! Project model.

use serde::Serialize;
use sqlx::FromRow;
use prompt_explorer_core::types::DbId;

/// A row from the `projects` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub main_request: Option<String>,
    pub final_integration: Option<String>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub name: String,
    pub main_request: Option<String>,
    pub final_integration: Option<String>,
}
