//! Proof-of-work puzzle
//!
//! A proof is valid when the SHA-256 digest of the previous proof and the
//! candidate proof, concatenated as decimal text, starts with four zero hex
//! digits. The concatenation carries no separator, so distinct splits of
//! the same digit string share a preimage; that quirk is part of the
//! protocol and pinned by a test below.

use crate::constants::DIFFICULTY_PREFIX;
use crate::crypto::sha256_hex;

/// Check a candidate proof against the previous block's proof.
pub fn verify(previous_proof: u64, proof: u64) -> bool {
    let guess = format!("{}{}", previous_proof, proof);
    sha256_hex(guess.as_bytes()).starts_with(DIFFICULTY_PREFIX)
}

/// Find the smallest proof valid against `previous_proof`.
///
/// Linear scan from zero; fully deterministic. CPU-bound - callers that
/// need to cancel the search use `mining::Miner` instead.
pub fn solve(previous_proof: u64) -> u64 {
    let mut proof = 0u64;
    while !verify(previous_proof, proof) {
        proof += 1;
    }
    proof
}
