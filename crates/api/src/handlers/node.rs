//! Handlers for prompt nodes.

use axum::extract::State;
use prompt_explorer_core::types::DbId;
use prompt_explorer_core::validation::{require_text, MAX_NAME_LENGTH, MAX_TEXT_LENGTH};
use prompt_explorer_db::models::node::CreateNode;
use prompt_explorer_db::repositories::{NodeRepo, PromptRepo};
use prompt_explorer_db::DbPool;
use serde::{Deserialize, Serialize};

use super::{invalid, prompt_not_found};
use crate::error::AppResult;
use crate::extract::{IdPath, JsonBody};
use crate::response::{ApiResponse, CreatedBody};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeItem {
    pub node_id: DbId,
    pub name: String,
    pub action: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct NodesBody {
    pub nodes: Vec<NodeItem>,
}

/// Request body for `POST /prompts/{id}/nodes`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateNodeRequest {
    pub name: Option<String>,
    pub action: Option<String>,
}

/// Nodes of a prompt in insertion order.
pub async fn list_prompt_nodes(pool: &DbPool, prompt_id: DbId) -> AppResult<NodesBody> {
    if !PromptRepo::exists(pool, prompt_id).await? {
        return Err(prompt_not_found(prompt_id));
    }

    let nodes = NodeRepo::list_by_prompt(pool, prompt_id)
        .await?
        .into_iter()
        .map(|n| NodeItem {
            node_id: n.id,
            name: n.name,
            action: n.action,
        })
        .collect();

    Ok(NodesBody { nodes })
}

/// Append a node to a prompt.
pub async fn add_prompt_node(
    pool: &DbPool,
    prompt_id: DbId,
    input: &CreateNodeRequest,
) -> AppResult<CreatedBody> {
    let name = require_text("name", input.name.as_deref(), MAX_NAME_LENGTH).map_err(invalid)?;
    let action =
        require_text("action", input.action.as_deref(), MAX_TEXT_LENGTH).map_err(invalid)?;

    let mut tx = prompt_explorer_db::begin_write(pool).await?;

    if !PromptRepo::exists(&mut *tx, prompt_id).await? {
        return Err(prompt_not_found(prompt_id));
    }

    let node = NodeRepo::create(
        &mut *tx,
        &CreateNode {
            prompt_id,
            name,
            action: Some(action),
        },
    )
    .await?;

    tx.commit().await?;

    tracing::info!(node_id = node.id, prompt_id, "Node created");

    Ok(CreatedBody { id: Some(node.id) })
}

/// GET /prompts/{id}/nodes
pub async fn list_by_prompt(
    State(state): State<AppState>,
    IdPath(prompt_id): IdPath,
) -> ApiResponse<NodesBody> {
    ApiResponse(list_prompt_nodes(&state.pool, prompt_id).await)
}

/// POST /prompts/{id}/nodes
pub async fn create(
    State(state): State<AppState>,
    IdPath(prompt_id): IdPath,
    JsonBody(input): JsonBody<CreateNodeRequest>,
) -> ApiResponse<CreatedBody> {
    ApiResponse(add_prompt_node(&state.pool, prompt_id, &input).await)
}
