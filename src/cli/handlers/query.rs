use anyhow::{Context, Result, bail};

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, document: String, variables: Option<String>) -> Result<()> {
    let schema = ctx.open_schema()?;

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Failed to parse --variables as JSON")?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    if response.is_err() {
        bail!("GraphQL request returned {} error(s)", response.errors.len());
    }
    Ok(())
}
