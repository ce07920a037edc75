//! Repository for the `prompts` table.

use sqlx::sqlite::SqliteExecutor;
use prompt_explorer_core::chain::PromptLink;
use prompt_explorer_core::types::DbId;

use crate::models::prompt::{CreatePrompt, Prompt};

/// Column list for prompts queries.
const COLUMNS: &str = "id, title, description, parent_prompt_id, project_id";

/// Provides create and lookup operations for prompts.
pub struct PromptRepo;

impl PromptRepo {
    /// Insert a new prompt, returning the created row.
    ///
    /// Fails with a unique violation on `uq_prompts_parent_prompt_id` when
    /// the parent already has a child.
    pub async fn create<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreatePrompt,
    ) -> Result<Prompt, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompts (title, description, parent_prompt_id, project_id)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prompt>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.parent_prompt_id)
            .bind(input.project_id)
            .fetch_one(executor)
            .await
    }

    /// Find a prompt by its ID.
    pub async fn find_by_id<'e>(
        executor: impl SqliteExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE id = ?1");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Whether a prompt with this ID exists.
    pub async fn exists<'e>(
        executor: impl SqliteExecutor<'e>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let found: Option<(DbId,)> = sqlx::query_as("SELECT id FROM prompts WHERE id = ?1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(found.is_some())
    }

    /// Find the prompt chained directly under `parent_id`, if any.
    pub async fn find_child<'e>(
        executor: impl SqliteExecutor<'e>,
        parent_id: DbId,
    ) -> Result<Option<Prompt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompts WHERE parent_prompt_id = ?1");
        sqlx::query_as::<_, Prompt>(&query)
            .bind(parent_id)
            .fetch_optional(executor)
            .await
    }

    /// List the parent links of every prompt in a project, by ID.
    pub async fn list_links_by_project<'e>(
        executor: impl SqliteExecutor<'e>,
        project_id: DbId,
    ) -> Result<Vec<PromptLink>, sqlx::Error> {
        let rows: Vec<(DbId, Option<DbId>)> = sqlx::query_as(
            "SELECT id, parent_prompt_id FROM prompts WHERE project_id = ?1 ORDER BY id ASC",
        )
        .bind(project_id)
        .fetch_all(executor)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, parent_id)| PromptLink { id, parent_id })
            .collect())
    }
}
