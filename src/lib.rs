//! Nanochain Core Library
//!
//! A single-node participant in a toy distributed ledger: an append-only
//! chain of blocks, a pending-transaction pool, proof-of-work mining, and
//! longest-valid-chain reconciliation against peer nodes.

pub mod consensus;
pub mod crypto;
pub mod ledger;
pub mod mining;
pub mod node;
pub mod p2p;
pub mod rpc;

/// Protocol constants - fixed for every node, never configurable
pub mod constants {
    /// Hex prefix a proof digest must carry to be valid (fixed difficulty)
    pub const DIFFICULTY_PREFIX: &str = "0000";

    /// Proof recorded in the genesis block
    pub const GENESIS_PROOF: u64 = 100;

    /// Sentinel `previous_hash` of the genesis block.
    ///
    /// The literal `"1"`, not a digest. Genesis linkage is never verified,
    /// so the value is inert, but it must stay as-is for chains to remain
    /// comparable across nodes.
    pub const GENESIS_PREVIOUS_HASH: &str = "1";

    /// Sender recorded on mining reward transactions
    pub const REWARD_SENDER: &str = "0";

    /// Amount granted to the node for mining a block
    pub const MINING_REWARD: f64 = 1.0;

    /// Default RPC listen port
    pub const DEFAULT_PORT: u16 = 5000;

    /// Default per-peer timeout for chain fetches during resolution
    pub const PEER_FETCH_TIMEOUT_SECS: u64 = 5;
}
