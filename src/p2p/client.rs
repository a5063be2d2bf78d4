//! Peer chain fetching
//!
//! Outbound half of consensus resolution: ask a peer for its chain
//! snapshot over HTTP. The transport sits behind the `ChainFetcher` trait
//! so resolution logic can be driven against in-memory peers in tests.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ledger::Block;

/// A peer's self-reported view of its chain, as served by `GET /chain`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    pub chain: Vec<Block>,
    pub length: u64,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("peer request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("peer answered HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Fetches a peer's chain snapshot. `peer` is a netloc (`host[:port]`).
pub trait ChainFetcher {
    fn fetch_chain(
        &self,
        peer: &str,
    ) -> impl Future<Output = Result<ChainSnapshot, FetchError>> + Send;
}

/// HTTP implementation used by the running node.
///
/// Every request is bounded by the client-wide timeout; a dead peer counts
/// as a failed fetch, never an open-ended wait.
#[derive(Debug, Clone)]
pub struct HttpChainFetcher {
    client: reqwest::Client,
}

impl HttpChainFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl ChainFetcher for HttpChainFetcher {
    async fn fetch_chain(&self, peer: &str) -> Result<ChainSnapshot, FetchError> {
        let url = format!("http://{}/chain", peer);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        Ok(response.json::<ChainSnapshot>().await?)
    }
}
