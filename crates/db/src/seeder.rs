//! One-time load of the seed document into a fresh schema.
//!
//! The document's prompts become a single chain in document order: each
//! prompt's parent is the prompt inserted just before it. Subprompts become
//! the prompt's nodes, also in document order.

use std::path::Path;

use prompt_explorer_core::seed::{SeedDocument, SeedDocumentError};
use prompt_explorer_core::types::DbId;

use crate::models::node::CreateNode;
use crate::models::project::CreateProject;
use crate::models::prompt::CreatePrompt;
use crate::repositories::{NodeRepo, ProjectRepo, PromptRepo};
use crate::schema;
use crate::DbPool;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Seed file missing: {0}")]
    FileMissing(String),

    #[error("Seed file unreadable: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed data malformed: {0}")]
    Malformed(String),

    #[error("Seed storage error: {0}")]
    Store(#[from] sqlx::Error),
}

impl From<SeedDocumentError> for SeedError {
    fn from(err: SeedDocumentError) -> Self {
        match err {
            SeedDocumentError::FileMissing { path } => {
                SeedError::FileMissing(path.display().to_string())
            }
            SeedDocumentError::Io { path, source } => SeedError::Io {
                path: path.display().to_string(),
                source,
            },
            SeedDocumentError::Malformed(msg) => SeedError::Malformed(msg),
        }
    }
}

/// What a successful seed inserted.
#[derive(Debug, Clone)]
pub struct SeedSummary {
    pub project_id: DbId,
    /// Prompt ids in chain order.
    pub prompt_ids: Vec<DbId>,
    pub node_count: usize,
}

/// Reset the schema, then load the document at `path`.
///
/// The schema is recreated before the file is read, so a missing or
/// malformed document leaves empty tables behind.
pub async fn seed_from_file(pool: &DbPool, path: &Path) -> Result<SeedSummary, SeedError> {
    schema::reset_and_create_schema(pool).await?;

    let doc = SeedDocument::load(path)?;
    tracing::debug!(
        path = %path.display(),
        prompts = doc.prompts.len(),
        "Seed document loaded"
    );

    insert_document(pool, &doc).await
}

/// Reset the schema, then load an already-parsed document.
pub async fn seed(pool: &DbPool, doc: &SeedDocument) -> Result<SeedSummary, SeedError> {
    schema::reset_and_create_schema(pool).await?;
    insert_document(pool, doc).await
}

/// Insert the whole document in one transaction.
async fn insert_document(pool: &DbPool, doc: &SeedDocument) -> Result<SeedSummary, SeedError> {
    let mut tx = crate::begin_write(pool).await?;

    let project = ProjectRepo::create(
        &mut *tx,
        &CreateProject {
            name: doc.project.trim().to_string(),
            main_request: doc.main_request.clone(),
            final_integration: doc.final_integration.clone(),
        },
    )
    .await?;

    let mut prompt_ids = Vec::with_capacity(doc.prompts.len());
    let mut parent_prompt_id: Option<DbId> = None;
    let mut node_count = 0;

    for seed_prompt in &doc.prompts {
        let prompt = PromptRepo::create(
            &mut *tx,
            &CreatePrompt {
                project_id: project.id,
                parent_prompt_id,
                title: seed_prompt.title.trim().to_string(),
                description: seed_prompt.description.clone(),
            },
        )
        .await?;

        for seed_node in &seed_prompt.subprompts {
            NodeRepo::create(
                &mut *tx,
                &CreateNode {
                    prompt_id: prompt.id,
                    name: seed_node.name.trim().to_string(),
                    action: seed_node.action.clone(),
                },
            )
            .await?;
            node_count += 1;
        }

        parent_prompt_id = Some(prompt.id);
        prompt_ids.push(prompt.id);
    }

    tx.commit().await?;

    tracing::info!(
        project_id = project.id,
        project = %project.name,
        prompts = prompt_ids.len(),
        nodes = node_count,
        "Database seeded"
    );

    Ok(SeedSummary {
        project_id: project.id,
        prompt_ids,
        node_count,
    })
}
