//! Chain and pending-pool ownership
//!
//! The `Ledger` holds the block chain and the pool of transactions waiting
//! to be mined. All mutation goes through it.

use std::time::{SystemTime, UNIX_EPOCH};

use log::info;

use crate::constants::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
use crate::ledger::{Block, Transaction};

/// The node's view of the chain plus its pending-transaction pool.
#[derive(Debug)]
pub struct Ledger {
    chain: Vec<Block>,
    pending: Vec<Transaction>,
}

impl Ledger {
    /// Create a ledger seeded with the genesis block (index 1, proof 100,
    /// sentinel previous hash, no transactions).
    pub fn new() -> Self {
        let mut ledger = Self {
            chain: Vec::new(),
            pending: Vec::new(),
        };
        ledger.new_block(GENESIS_PROOF, Some(GENESIS_PREVIOUS_HASH.to_string()));
        ledger
    }

    /// Append a new block carrying everything currently pending.
    ///
    /// The pool is drained into the block and reset. When `previous_hash`
    /// is absent it is computed from the current tip. The proof is recorded
    /// as given - this layer performs no proof validation; producing a
    /// valid proof is the mining flow's job.
    pub fn new_block(&mut self, proof: u64, previous_hash: Option<String>) -> &Block {
        let previous_hash = match previous_hash {
            Some(hash) => hash,
            None => self.last_block().digest(),
        };

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs_f64();

        let block = Block {
            index: self.chain.len() as u64 + 1,
            timestamp,
            transactions: std::mem::take(&mut self.pending),
            proof,
            previous_hash,
        };

        info!(
            "appended block {} carrying {} transaction(s)",
            block.index,
            block.transactions.len()
        );
        self.chain.push(block);
        self.last_block()
    }

    /// Queue a transaction for inclusion in the next mined block.
    ///
    /// Returns the index that block is expected to have - a prediction,
    /// not a guarantee, since mining and queueing interleave.
    pub fn queue_transaction(&mut self, sender: &str, recipient: &str, amount: f64) -> u64 {
        self.pending.push(Transaction::new(sender, recipient, amount));
        self.last_block().index + 1
    }

    /// The chain's final block.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("ledger always holds at least the genesis block")
    }

    /// Replace the whole chain. Used only by consensus resolution; the
    /// pending pool is untouched.
    pub fn replace_chain(&mut self, chain: Vec<Block>) {
        self.chain = chain;
    }

    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }

    /// Number of blocks in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Always false: the chain holds at least the genesis block.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
