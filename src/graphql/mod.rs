//! GraphQL schema, resolvers and HTTP server for the todo API.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! todo-api serve --port 4000
//!
//! # Execute a document from the CLI
//! todo-api query 'mutation { addTodo(title: "Buy milk") { id title completed } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `getTodos`, `message`
//! - **Mutations**: `addTodo`, `updateTodo`, `deleteTodo`

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, TodoSchema, build_schema};
pub use server::{router, run_server, serve};
pub use types::*;
