//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//!
//! Rows are append-only, so there are no update DTOs.

pub mod node;
pub mod note;
pub mod project;
pub mod prompt;
