use std::future::Future;
use std::net::SocketAddr;

use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use colored::Colorize;
use tokio::net::TcpListener;

use super::schema::TodoSchema;
use crate::error::Result;

/// Path the GraphQL endpoint and playground are served from.
pub const ENDPOINT: &str = "/";

async fn graphql_handler(State(schema): State<TodoSchema>, req: GraphQLRequest) -> GraphQLResponse {
    let req = req.into_inner();
    tracing::debug!(operation = ?req.operation_name, "Executing GraphQL request");
    schema.execute(req).await.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new(ENDPOINT)))
}

/// HTTP routes: `POST /` executes GraphQL, `GET /` serves the playground.
pub fn router(schema: TodoSchema) -> Router {
    Router::new()
        .route(ENDPOINT, get(graphql_playground).post(graphql_handler))
        .with_state(schema)
}

/// Serves the API on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, schema: TodoSchema, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Binds `host:port`, announces the resolved URL on stdout and serves until Ctrl-C.
///
/// Port `0` lets the OS pick a free port; the printed URL carries the real one.
pub async fn run_server(schema: TodoSchema, host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;

    tracing::info!(%addr, "GraphQL server listening");
    println!("🚀 Server ready at {}", server_url(addr).cyan());

    serve(listener, schema, shutdown_signal()).await?;
    tracing::info!("GraphQL server stopped");
    Ok(())
}

fn server_url(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://localhost:{}{}", addr.port(), ENDPOINT)
    } else {
        format!("http://{}{}", addr, ENDPOINT)
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
