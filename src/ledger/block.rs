//! Block and transaction structures
//!
//! Defines the immutable block record and the transactions it carries.

use serde::{Deserialize, Serialize};

use crate::crypto::{canonical_json, sha256_hex};

/// A transfer between two parties.
///
/// Sender and recipient are opaque strings; no identity or balance
/// validation happens at this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: f64) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        }
    }
}

/// A block in the chain.
///
/// `index` is the 1-based position in the chain. `previous_hash` is the
/// digest of the immediate predecessor, except for the genesis block where
/// it is the fixed sentinel `"1"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    /// Seconds since the Unix epoch at block creation
    pub timestamp: f64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

impl Block {
    /// Digest of the block's canonical serialization.
    ///
    /// Fields are serialized with keys in lexicographic order, so two
    /// structurally equal blocks digest identically no matter how they
    /// were represented on the wire.
    pub fn digest(&self) -> String {
        sha256_hex(canonical_json(self).as_bytes())
    }
}
