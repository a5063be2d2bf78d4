//! HTTP route handlers
//!
//! Each handler decodes the request body, calls into the node, and encodes
//! the response. The core never touches wire formats outside this module.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::ledger::{Block, Transaction};
use crate::node::{Node, NodeError};
use crate::p2p::{ChainSnapshot, HttpChainFetcher};

/// Shared handler state.
pub struct RpcState {
    pub node: Node,
    pub fetcher: HttpChainFetcher,
}

#[derive(Debug, Deserialize)]
pub struct NewTransactionRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: f64,
}

#[derive(Debug, Serialize)]
pub struct NewTransactionResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterNodesRequest {
    pub nodes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterNodesResponse {
    pub message: String,
    pub total_nodes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MineResponse {
    pub message: String,
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_chain: Option<Vec<Block>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<Vec<Block>>,
}

/// `GET /mine` - mine one block on the current tip.
pub async fn mine(
    State(state): State<Arc<RpcState>>,
) -> Result<Json<MineResponse>, (StatusCode, String)> {
    match state.node.mine().await {
        Ok(block) => Ok(Json(MineResponse {
            message: "Created new block.".to_string(),
            index: block.index,
            transactions: block.transactions,
            proof: block.proof,
            previous_hash: block.previous_hash,
        })),
        Err(err) => {
            let status = match err {
                NodeError::StaleTip => StatusCode::CONFLICT,
                NodeError::MiningInterrupted => StatusCode::SERVICE_UNAVAILABLE,
            };
            Err((status, err.to_string()))
        }
    }
}

/// `POST /transactions/new` - queue a transaction for the next block.
pub async fn new_transaction(
    State(state): State<Arc<RpcState>>,
    Json(request): Json<NewTransactionRequest>,
) -> (StatusCode, Json<NewTransactionResponse>) {
    let index = state
        .node
        .queue_transaction(&request.sender, &request.recipient, request.amount);

    let response = NewTransactionResponse {
        message: format!("Transaction will be added to Block {}", index),
    };
    (StatusCode::CREATED, Json(response))
}

/// `GET /chain` - the full chain and its length.
pub async fn full_chain(State(state): State<Arc<RpcState>>) -> Json<ChainSnapshot> {
    Json(state.node.chain_snapshot())
}

/// `POST /nodes/register` - add peers to the registry.
pub async fn register_nodes(
    State(state): State<Arc<RpcState>>,
    Json(request): Json<RegisterNodesRequest>,
) -> Result<(StatusCode, Json<RegisterNodesResponse>), (StatusCode, String)> {
    if request.nodes.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "expected a non-empty list of node addresses".to_string(),
        ));
    }

    for address in &request.nodes {
        state
            .node
            .register_peer(address)
            .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;
    }

    let response = RegisterNodesResponse {
        message: "Nodes added".to_string(),
        total_nodes: state.node.peer_addresses(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /nodes/resolve` - run one consensus resolution round.
pub async fn resolve(State(state): State<Arc<RpcState>>) -> Json<ResolveResponse> {
    let outcome = state.node.resolve(&state.fetcher).await;

    let response = if outcome.replaced {
        ResolveResponse {
            message: "Replaced block chain".to_string(),
            new_chain: Some(outcome.chain),
            chain: None,
        }
    } else {
        ResolveResponse {
            message: "Block chain is authoritative".to_string(),
            new_chain: None,
            chain: Some(outcome.chain),
        }
    };
    Json(response)
}
