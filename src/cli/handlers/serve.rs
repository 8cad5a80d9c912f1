use crate::graphql::run_server;
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext) -> Result<()> {
    let schema = ctx.open_schema()?;
    let server = &ctx.config.server;

    tracing::info!(database = %ctx.config.database.path, "Starting GraphQL server");
    tokio::runtime::Runtime::new()?
        .block_on(async { run_server(schema, &server.host, server.port).await })?;
    Ok(())
}
