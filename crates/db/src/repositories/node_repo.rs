//! Repository for the `nodes` table.

use sqlx::sqlite::SqliteExecutor;
use prompt_explorer_core::types::DbId;

use crate::models::node::{CreateNode, Node};

/// Column list for nodes queries.
const COLUMNS: &str = "id, prompt_id, name, action";

/// Provides create and list operations for prompt nodes.
pub struct NodeRepo;

impl NodeRepo {
    /// Insert a new node, returning the created row.
    ///
    /// Nodes are ordered by ID, so a new node always lands after the
    /// existing nodes of its prompt.
    pub async fn create<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreateNode,
    ) -> Result<Node, sqlx::Error> {
        let query = format!(
            "INSERT INTO nodes (prompt_id, name, action)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Node>(&query)
            .bind(input.prompt_id)
            .bind(&input.name)
            .bind(&input.action)
            .fetch_one(executor)
            .await
    }

    /// List the nodes of a prompt in insertion order.
    pub async fn list_by_prompt<'e>(
        executor: impl SqliteExecutor<'e>,
        prompt_id: DbId,
    ) -> Result<Vec<Node>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM nodes WHERE prompt_id = ?1 ORDER BY id ASC");
        sqlx::query_as::<_, Node>(&query)
            .bind(prompt_id)
            .fetch_all(executor)
            .await
    }
}
