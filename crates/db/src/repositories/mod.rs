//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async functions that
//! accept any SQLite executor as the first argument: a `&DbPool` for
//! one-off statements, or `&mut *tx` to run inside an open transaction.

pub mod node_repo;
pub mod note_repo;
pub mod project_repo;
pub mod prompt_repo;

pub use node_repo::NodeRepo;
pub use note_repo::NoteRepo;
pub use project_repo::ProjectRepo;
pub use prompt_repo::PromptRepo;
