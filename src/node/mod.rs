//! Node context
//!
//! One shared-state object reachable from every request path. The ledger
//! and peer registry sit behind a single mutex; `queue_transaction`,
//! `register_peer`, block appends, and the resolution chain swap are all
//! mutually exclusive. The proof search itself never runs under the lock.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{info, warn};
use thiserror::Error;
use tokio::task::JoinSet;
use uuid::Uuid;

use crate::consensus::{select_longest_valid, ResolutionOutcome};
use crate::constants::{MINING_REWARD, REWARD_SENDER};
use crate::ledger::{Block, Ledger};
use crate::mining::{Miner, MiningResult};
use crate::p2p::{ChainFetcher, ChainSnapshot, PeerRegistry, RegistryError};

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("chain tip moved while mining, block discarded")]
    StaleTip,
    #[error("mining was interrupted before a proof was found")]
    MiningInterrupted,
}

/// Everything mutable, behind one lock.
struct NodeState {
    ledger: Ledger,
    peers: PeerRegistry,
}

/// Handle to a running node's state. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Node {
    state: Arc<Mutex<NodeState>>,
    miner: Miner,
    node_id: String,
}

impl Node {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(NodeState {
                ledger: Ledger::new(),
                peers: PeerRegistry::new(),
            })),
            miner: Miner::new(),
            // Dashless UUID, doubles as the reward recipient address.
            node_id: Uuid::new_v4().simple().to_string(),
        }
    }

    /// This node's identity, the recipient of its mining rewards.
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// The miner handle, exposed so shutdown can stop an in-flight search.
    pub fn miner(&self) -> &Miner {
        &self.miner
    }

    fn state(&self) -> MutexGuard<'_, NodeState> {
        self.state.lock().unwrap()
    }

    /// Queue a transaction; returns the predicted landing block index.
    pub fn queue_transaction(&self, sender: &str, recipient: &str, amount: f64) -> u64 {
        self.state().ledger.queue_transaction(sender, recipient, amount)
    }

    pub fn register_peer(&self, address: &str) -> Result<(), RegistryError> {
        self.state().peers.register(address)
    }

    pub fn peer_addresses(&self) -> Vec<String> {
        self.state().peers.addresses()
    }

    /// The chain plus its length, in the shape peers exchange.
    pub fn chain_snapshot(&self) -> ChainSnapshot {
        let state = self.state();
        ChainSnapshot {
            length: state.ledger.len() as u64,
            chain: state.ledger.chain().to_vec(),
        }
    }

    /// Mine one block on top of the current tip.
    ///
    /// The tip is snapshotted under the lock, the proof search runs on a
    /// blocking worker without the lock, and the append re-checks that the
    /// tip is unchanged. A tip that moved during the search (another mined
    /// block, an adopted peer chain) fails with `StaleTip` instead of
    /// appending against a superseded predecessor.
    pub async fn mine(&self) -> Result<Block, NodeError> {
        let tip = self.state().ledger.last_block().clone();
        let previous_proof = tip.proof;

        self.miner.reset();
        let miner = self.miner.clone();
        let result = tokio::task::spawn_blocking(move || miner.mine(previous_proof))
            .await
            .map_err(|_| NodeError::MiningInterrupted)?;

        let proof = match result {
            MiningResult::Solved(proof) => proof,
            MiningResult::Interrupted => return Err(NodeError::MiningInterrupted),
        };

        let previous_hash = tip.digest();
        let mut state = self.state();
        if state.ledger.last_block().digest() != previous_hash {
            warn!("tip moved during proof search, discarding mined proof");
            return Err(NodeError::StaleTip);
        }

        // Reward lands in the block being created, after any user
        // transactions already pending.
        state
            .ledger
            .queue_transaction(REWARD_SENDER, &self.node_id, MINING_REWARD);
        let block = state.ledger.new_block(proof, Some(previous_hash)).clone();
        info!("mined block {} with proof {}", block.index, block.proof);
        Ok(block)
    }

    /// Run one consensus resolution round against all registered peers.
    ///
    /// Snapshots are fetched concurrently; unreachable or malformed peers
    /// are skipped and resolution continues with the rest. The local chain
    /// is replaced only by a strictly longer chain that validates, as one
    /// atomic swap.
    pub async fn resolve<F>(&self, fetcher: &F) -> ResolutionOutcome
    where
        F: ChainFetcher + Clone + Send + Sync + 'static,
    {
        let peers = self.peer_addresses();

        let mut fetches = JoinSet::new();
        for peer in peers {
            let fetcher = fetcher.clone();
            fetches.spawn(async move {
                let result = fetcher.fetch_chain(&peer).await;
                (peer, result)
            });
        }

        let mut snapshots = Vec::new();
        while let Some(joined) = fetches.join_next().await {
            let Ok((peer, result)) = joined else { continue };
            match result {
                Ok(snapshot) => snapshots.push((peer, snapshot)),
                Err(err) => warn!("skipping peer {}: {}", peer, err),
            }
        }

        let mut state = self.state();
        match select_longest_valid(state.ledger.len(), snapshots) {
            Some(chain) => {
                state.ledger.replace_chain(chain);
                info!("adopted peer chain, new length {}", state.ledger.len());
                ResolutionOutcome {
                    replaced: true,
                    chain: state.ledger.chain().to_vec(),
                }
            }
            None => ResolutionOutcome {
                replaced: false,
                chain: state.ledger.chain().to_vec(),
            },
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
