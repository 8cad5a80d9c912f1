use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TodoError};
use crate::validation;

/// Identifier assigned by the store when a todo is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        validation::parse_id(s).map(TodoId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Input for `addTodo`. Only constructible through [`NewTodo::new`], so the
/// title has always passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: String,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        validation::validate_title(&title)?;
        Ok(Self { title })
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Input for `updateTodo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoUpdate {
    pub id: TodoId,
    pub completed: bool,
}

impl TodoUpdate {
    pub fn parse(id: &str, completed: bool) -> Result<Self> {
        Ok(Self {
            id: id.parse()?,
            completed,
        })
    }
}
