//! Chain validation
//!
//! Pure integrity walk over a candidate chain - our own or a peer's.

use crate::consensus::pow;
use crate::ledger::Block;

/// Check hash-link continuity and proof-of-work validity end to end.
///
/// Each block after the first must reference its predecessor's digest and
/// carry a proof valid against the predecessor's proof. The first block is
/// only used as an anchor; genesis well-formedness is not checked. Chains
/// of length 0 or 1 are valid.
pub fn is_valid_chain(chain: &[Block]) -> bool {
    for pair in chain.windows(2) {
        let (previous, block) = (&pair[0], &pair[1]);

        if block.previous_hash != previous.digest() {
            return false;
        }
        if !pow::verify(previous.proof, block.proof) {
            return false;
        }
    }
    true
}
