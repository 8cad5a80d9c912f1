//! # todo-api - A minimal GraphQL todo service
//!
//! Serves a small GraphQL API over HTTP for creating, listing, completing and
//! deleting todos. Todos are stored in a single SQLite table.
//!
//! ## Schema
//!
//! ```graphql
//! type Todo { id: ID!, title: String!, completed: Boolean! }
//! type Query { getTodos: [Todo!]!, message: String! }
//! type Mutation {
//!   addTodo(title: String!): Todo!
//!   updateTodo(id: ID!, completed: Boolean!): Todo!
//!   deleteTodo(id: ID!): Todo!
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://127.0.0.1:4000/ with ./todos.db
//! todo-api serve
//!
//! # Run a mutation without starting the server
//! todo-api query 'mutation { addTodo(title: "Buy milk") { id } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Todo data model
//! - [`storage`]: SQLite-backed repository
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Reads `todo-api.toml` and applies command-line overrides.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `TodoError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
pub mod graphql;

/// Logging setup (stderr and optional rotating JSON file).
pub mod logging;

/// Data models for todos.
pub mod model;

/// Relational storage layer.
///
/// Defines the `TodoRepository` trait and its SQLite implementation.
pub mod storage;

/// Input validation utilities.
pub mod validation;
