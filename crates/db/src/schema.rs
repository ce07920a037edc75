//! Table definitions.
//!
//! The schema is rebuilt from scratch at startup by the seeder, so it lives
//! here as plain DDL instead of incremental migrations.

use crate::DbPool;

/// All tables, parents first.
pub const TABLES: [&str; 4] = ["projects", "prompts", "nodes", "notes"];

const CREATE_STATEMENTS: &[&str] = &[
    "CREATE TABLE projects (
        id                INTEGER PRIMARY KEY AUTOINCREMENT,
        name              TEXT NOT NULL,
        main_request      TEXT,
        final_integration TEXT
    )",
    "CREATE TABLE prompts (
        id               INTEGER PRIMARY KEY AUTOINCREMENT,
        title            TEXT NOT NULL,
        description      TEXT,
        parent_prompt_id INTEGER REFERENCES prompts(id) ON DELETE SET NULL,
        project_id       INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE
    )",
    // One child per parent. NULL parents (roots) are not constrained.
    "CREATE UNIQUE INDEX uq_prompts_parent_prompt_id ON prompts(parent_prompt_id)",
    "CREATE INDEX idx_prompts_project_id ON prompts(project_id)",
    "CREATE TABLE nodes (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        prompt_id INTEGER NOT NULL REFERENCES prompts(id) ON DELETE CASCADE,
        name      TEXT NOT NULL,
        action    TEXT
    )",
    "CREATE INDEX idx_nodes_prompt_id ON nodes(prompt_id)",
    "CREATE TABLE notes (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        prompt_id  INTEGER NOT NULL REFERENCES prompts(id) ON DELETE CASCADE,
        content    TEXT NOT NULL,
        created_at TEXT NOT NULL
    )",
    "CREATE INDEX idx_notes_prompt_id_created_at ON notes(prompt_id, created_at)",
];

/// Name of the unique index guarding the prompt chain.
pub const CHAIN_INDEX: &str = "uq_prompts_parent_prompt_id";

/// Drop every table and create the schema again.
///
/// Destructive. Only the seeder calls this, once at startup.
pub async fn reset_and_create_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = crate::begin_write(pool).await?;

    for table in TABLES.iter().rev() {
        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(&mut *tx)
            .await?;
    }
    for statement in CREATE_STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    tracing::debug!(tables = ?TABLES, "Schema recreated");
    Ok(())
}
