use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Overrides;

#[derive(Parser)]
#[command(name = "todo-api")]
#[command(author, version, about = "A minimal GraphQL todo API server")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to ./todo-api.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind to
        #[arg(long, env = "TODO_API_HOST")]
        host: Option<String>,

        /// Port to listen on (0 picks a free port)
        #[arg(short, long, env = "TODO_API_PORT")]
        port: Option<u16>,

        #[command(flatten)]
        db: DatabaseArgs,
    },

    /// Execute a GraphQL document against the database and print the JSON response
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL query or mutation document
        document: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        #[command(flatten)]
        db: DatabaseArgs,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// SQLite database file, or ":memory:"
    #[arg(short, long, env = "TODO_API_DATABASE")]
    pub database: Option<String>,
}

impl Commands {
    /// Config values this command overrides.
    pub fn overrides(&self) -> Overrides {
        match self {
            Commands::Serve { host, port, db } => Overrides {
                host: host.clone(),
                port: *port,
                database: db.database.clone(),
            },
            Commands::Query { db, .. } => Overrides {
                database: db.database.clone(),
                ..Overrides::default()
            },
            Commands::Schema => Overrides::default(),
        }
    }
}
