//! RPC HTTP Server
//!
//! Axum-based HTTP server exposing the node's API routes.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use log::info;
use tower_http::cors::{Any, CorsLayer};

use crate::rpc::methods::{self, RpcState};

/// Build the API router.
pub fn router(state: Arc<RpcState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/mine", get(methods::mine))
        .route("/transactions/new", post(methods::new_transaction))
        .route("/chain", get(methods::full_chain))
        .route("/nodes/register", post(methods::register_nodes))
        .route("/nodes/resolve", get(methods::resolve))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve the API on the given address until the process exits.
pub async fn start_rpc_server(state: Arc<RpcState>, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("RPC server listening on http://{}", addr);
    axum::serve(listener, router(state)).await
}
