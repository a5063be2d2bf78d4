//! Proof search worker
//!
//! Runs the same linear scan as `consensus::pow::solve`, but checks a stop
//! signal between candidates so an in-flight search can be cancelled (on
//! shutdown) without touching chain state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::consensus::pow;

/// Outcome of a proof search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiningResult {
    /// Found a valid proof
    Solved(u64),
    /// The search was stopped before a proof was found
    Interrupted,
}

/// Interruptible proof-of-work searcher
#[derive(Debug, Clone)]
pub struct Miner {
    stop_signal: Arc<AtomicBool>,
}

impl Miner {
    pub fn new() -> Self {
        Self {
            stop_signal: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a stop signal handle
    pub fn stop_signal(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop_signal)
    }

    /// Stop any in-flight search
    pub fn stop(&self) {
        self.stop_signal.store(true, Ordering::SeqCst);
    }

    /// Clear the stop signal before a new search
    pub fn reset(&self) {
        self.stop_signal.store(false, Ordering::SeqCst);
    }

    /// Search for a proof valid against `previous_proof`.
    ///
    /// Identical scan order to `pow::solve`, so a completed search returns
    /// the same proof `solve` would.
    pub fn mine(&self, previous_proof: u64) -> MiningResult {
        let mut proof = 0u64;
        loop {
            if self.stop_signal.load(Ordering::SeqCst) {
                return MiningResult::Interrupted;
            }
            if pow::verify(previous_proof, proof) {
                return MiningResult::Solved(proof);
            }
            proof += 1;
        }
    }
}

impl Default for Miner {
    fn default() -> Self {
        Self::new()
    }
}
