use crate::graphql::build_schema;
use crate::storage::SqliteTodoRepository;
use anyhow::Result;
use std::sync::Arc;

/// Prints the SDL. Uses a throwaway in-memory store, so no database is touched.
pub fn handle_schema() -> Result<()> {
    let repo = SqliteTodoRepository::open_in_memory()?;
    let schema = build_schema(Arc::new(repo));
    print!("{}", schema.sdl());
    Ok(())
}
