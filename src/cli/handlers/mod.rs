mod query;
mod schema;
mod serve;

pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::AppConfig;
use crate::graphql::{TodoSchema, build_schema};
use crate::storage::SqliteTodoRepository;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: AppConfig,
}

impl CommandContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Opens the configured database and builds a schema around it.
    pub fn open_schema(&self) -> Result<TodoSchema> {
        let path = self.config.database_path();
        let repo = SqliteTodoRepository::open(&path)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;
        Ok(build_schema(Arc::new(repo)))
    }
}
