//! Repository for the `projects` table.

use sqlx::sqlite::SqliteExecutor;
use prompt_explorer_core::types::DbId;

use crate::models::project::{CreateProject, Project};

/// Column list for projects queries.
const COLUMNS: &str = "id, name, main_request, final_integration";

/// Provides create and lookup operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, main_request, final_integration)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.main_request)
            .bind(&input.final_integration)
            .fetch_one(executor)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id<'e>(
        executor: impl SqliteExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// The project served by the unscoped tree endpoint: the oldest one.
    pub async fn find_default<'e>(
        executor: impl SqliteExecutor<'e>,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id ASC LIMIT 1");
        sqlx::query_as::<_, Project>(&query)
            .fetch_optional(executor)
            .await
    }

    /// List all projects, oldest first.
    pub async fn list<'e>(executor: impl SqliteExecutor<'e>) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id ASC");
        sqlx::query_as::<_, Project>(&query)
            .fetch_all(executor)
            .await
    }
}
