//! Data models for todos.
//!
//! - [`Todo`]: A stored todo record
//! - [`TodoId`]: Storage-assigned identifier
//! - [`NewTodo`]: Validated input for creating a todo
//! - [`TodoUpdate`]: Validated input for toggling completion

mod todo;

pub use todo::{NewTodo, Todo, TodoId, TodoUpdate};
