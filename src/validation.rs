//! Input validation for todo data.

use crate::error::{Result, TodoError};

/// Validates a todo title. Any non-blank string is accepted.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(TodoError::Validation("Title cannot be empty".to_string()));
    }
    Ok(())
}

/// Parses a GraphQL `ID` into the numeric key used by the store.
///
/// Ids are matched exactly as issued; surrounding whitespace is rejected.
pub fn parse_id(id: &str) -> Result<i64> {
    if id.is_empty() {
        return Err(TodoError::InvalidId("ID cannot be empty".to_string()));
    }
    id.parse::<i64>()
        .map_err(|_| TodoError::InvalidId(id.to_string()))
}
