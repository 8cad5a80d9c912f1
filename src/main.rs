use anyhow::{Context, Result};
use clap::Parser;

use todo_api::cli::handlers::{self, CommandContext};
use todo_api::cli::{Cli, Commands};
use todo_api::config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = todo_api::logging::init(cli.verbose, cli.log_file.clone());

    if let Commands::Schema = cli.command {
        return handlers::handle_schema();
    }

    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load configuration")?
        .apply(cli.command.overrides());
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve { .. } => handlers::handle_serve(ctx),
        Commands::Query {
            document,
            variables,
            ..
        } => handlers::handle_query(ctx, document, variables),
        Commands::Schema => handlers::handle_schema(),
    }
}
