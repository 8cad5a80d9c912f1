//! Relational storage layer for todos.
//!
//! Todos live in a single SQLite table:
//!
//! ```sql
//! CREATE TABLE todos (
//!     id        INTEGER PRIMARY KEY AUTOINCREMENT,
//!     title     TEXT    NOT NULL,
//!     completed INTEGER NOT NULL DEFAULT 0
//! );
//! ```
//!
//! ## Components
//!
//! - [`TodoRepository`]: CRUD contract the GraphQL resolvers depend on
//! - [`SqliteTodoRepository`]: SQLite-backed implementation holding one shared connection

mod repository;
mod sqlite;

pub use repository::TodoRepository;
pub use sqlite::SqliteTodoRepository;

/// Database path that selects a private in-memory store.
pub const IN_MEMORY: &str = ":memory:";
