//! Repository for the `notes` table.

use sqlx::sqlite::SqliteExecutor;
use prompt_explorer_core::types::DbId;

use crate::models::note::{CreateNote, Note};

/// Column list for notes queries.
const COLUMNS: &str = "id, prompt_id, content, created_at";

/// Provides create and list operations for prompt notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note stamped with the current UTC time.
    pub async fn create<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (prompt_id, content, created_at)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(input.prompt_id)
            .bind(&input.content)
            .bind(chrono::Utc::now())
            .fetch_one(executor)
            .await
    }

    /// List the notes of a prompt, newest first.
    pub async fn list_by_prompt<'e>(
        executor: impl SqliteExecutor<'e>,
        prompt_id: DbId,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE prompt_id = ?1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(prompt_id)
            .fetch_all(executor)
            .await
    }
}
