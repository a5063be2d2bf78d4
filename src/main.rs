//! Nanochain Node
//!
//! Main entry point for running a nanochain node.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::info;

use nanochain::constants;
use nanochain::node::Node;
use nanochain::p2p::HttpChainFetcher;
use nanochain::rpc::{start_rpc_server, RpcState};

#[derive(Parser)]
#[command(name = "nanochain-node")]
#[command(about = "Single-node toy ledger with PoW mining and longest-chain consensus")]
struct Args {
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = constants::DEFAULT_PORT)]
    port: u16,

    /// Per-peer timeout in seconds for chain fetches during resolution
    #[arg(long, default_value_t = constants::PEER_FETCH_TIMEOUT_SECS)]
    peer_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let node = Node::new();
    info!("node identifier: {}", node.node_id());

    let fetcher = HttpChainFetcher::new(Duration::from_secs(args.peer_timeout))?;
    let state = Arc::new(RpcState {
        node: node.clone(),
        fetcher,
    });

    let addr = format!("{}:{}", args.host, args.port);
    tokio::select! {
        served = start_rpc_server(state, &addr) => {
            served?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received, stopping miner");
            node.miner().stop();
        }
    }

    Ok(())
}
