//! Input validation for the write operations.
//!
//! Validators return `Result<_, String>` so handlers can wrap the message
//! in whichever error variant fits their layer.

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a prompt title in characters.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Maximum length of descriptions, actions and note content.
pub const MAX_TEXT_LENGTH: usize = 20_000;

/// Maximum length of a node name.
pub const MAX_NAME_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Require a non-blank text field, returning it with surrounding whitespace
/// removed.
///
/// `None`, an empty string and a whitespace-only string are all rejected.
pub fn require_text(field: &str, value: Option<&str>, max_len: usize) -> Result<String, String> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(format!("'{field}' is required and cannot be blank"));
    }
    if trimmed.chars().count() > max_len {
        return Err(format!(
            "'{field}' exceeds maximum length of {max_len} characters"
        ));
    }
    Ok(trimmed.to_string())
}

/// A new prompt must be chained under an existing prompt; ids start at 1.
pub fn validate_parent_id(parent_id: DbId) -> Result<(), String> {
    if parent_id <= 0 {
        return Err(format!(
            "Parent prompt id must be a positive integer, got {parent_id}"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
