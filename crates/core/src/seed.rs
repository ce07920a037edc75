//! Seed document model.
//!
//! The initial project state is loaded from a JSON document shaped as:
//!
//! ```text
//! {
//!   "project": "...",
//!   "mainRequest": "...",
//!   "finalIntegration": "...",
//!   "prompts": [
//!     { "id": 1, "title": "...", "description": "...",
//!       "subprompts": [ { "name": "...", "action": "..." } ] }
//!   ]
//! }
//! ```
//!
//! Prompt `id`s in the document are ignored; the store assigns its own.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors raised while reading or parsing a seed document.
#[derive(Debug, thiserror::Error)]
pub enum SeedDocumentError {
    #[error("Seed file not found: {}", path.display())]
    FileMissing { path: PathBuf },

    #[error("Failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed data: {0}")]
    Malformed(String),
}

/// The top-level seed document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDocument {
    pub project: String,
    #[serde(default)]
    pub main_request: Option<String>,
    #[serde(default)]
    pub final_integration: Option<String>,
    pub prompts: Vec<SeedPrompt>,
}

/// One prompt in the document; its position defines its place in the chain.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedPrompt {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subprompts: Vec<SeedNode>,
}

/// A subprompt, stored as a node of its prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedNode {
    pub name: String,
    #[serde(default)]
    pub action: Option<String>,
}

impl SeedDocument {
    /// Parse and check a seed document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SeedDocumentError> {
        let doc: SeedDocument = serde_json::from_str(json)
            .map_err(|e| SeedDocumentError::Malformed(e.to_string()))?;
        doc.check()?;
        Ok(doc)
    }

    /// Read and parse a seed document from disk.
    pub fn load(path: &Path) -> Result<Self, SeedDocumentError> {
        let json = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SeedDocumentError::FileMissing {
                    path: path.to_path_buf(),
                }
            } else {
                SeedDocumentError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::from_json_str(&json)
    }

    /// Total number of subprompts across all prompts.
    pub fn node_count(&self) -> usize {
        self.prompts.iter().map(|p| p.subprompts.len()).sum()
    }

    fn check(&self) -> Result<(), SeedDocumentError> {
        if self.project.trim().is_empty() {
            return Err(SeedDocumentError::Malformed(
                "'project' cannot be blank".to_string(),
            ));
        }
        for (index, prompt) in self.prompts.iter().enumerate() {
            if prompt.title.trim().is_empty() {
                return Err(SeedDocumentError::Malformed(format!(
                    "prompts[{index}].title cannot be blank"
                )));
            }
            if let Some(pos) = prompt.subprompts.iter().position(|n| n.name.trim().is_empty()) {
                return Err(SeedDocumentError::Malformed(format!(
                    "prompts[{index}].subprompts[{pos}].name cannot be blank"
                )));
            }
        }
        Ok(())
    }
}
