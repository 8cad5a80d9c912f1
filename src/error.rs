use async_graphql::ErrorExtensions;
use thiserror::Error;

use crate::model::TodoId;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    #[error("Invalid todo ID: {0}")]
    InvalidId(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TodoError {
    /// Machine-readable code reported in the GraphQL `extensions.code` field.
    pub fn code(&self) -> &'static str {
        match self {
            TodoError::NotFound(_) => "NOT_FOUND",
            TodoError::InvalidId(_) | TodoError::Validation(_) => "BAD_USER_INPUT",
            _ => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl ErrorExtensions for TodoError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_code() {
        let err = TodoError::NotFound(TodoId(7));
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.to_string(), "Todo not found: 7");
    }

    #[test]
    fn test_user_input_codes() {
        assert_eq!(TodoError::InvalidId("x".into()).code(), "BAD_USER_INPUT");
        assert_eq!(
            TodoError::Validation("Title cannot be empty".into()).code(),
            "BAD_USER_INPUT"
        );
    }

    #[test]
    fn test_storage_errors_are_internal() {
        let err = TodoError::Database(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.code(), "INTERNAL_SERVER_ERROR");
    }

    #[test]
    fn test_extend_sets_code_extension() {
        let err = TodoError::NotFound(TodoId(3)).extend();
        assert_eq!(err.message, "Todo not found: 3");
        let extensions = err.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("NOT_FOUND"))
        );
    }
}
