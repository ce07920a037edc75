use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("No project has been loaded")]
    ProjectMissing,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Prompt {parent_id} already has a child prompt")]
    ChainConflict { parent_id: DbId },
}
