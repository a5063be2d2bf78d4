//! Longest-valid-chain selection
//!
//! The selection half of consensus resolution: given the local chain length
//! and the snapshots fetched from peers, pick the replacement chain, if any.
//! Fetching and the actual swap live in the `node` module.

use log::{debug, warn};

use crate::consensus::validation::is_valid_chain;
use crate::ledger::Block;
use crate::p2p::ChainSnapshot;

/// What a resolution round did to the local chain.
#[derive(Debug, Clone)]
pub struct ResolutionOutcome {
    /// True when a peer's chain replaced the local one
    pub replaced: bool,
    /// The authoritative chain after resolution
    pub chain: Vec<Block>,
}

/// Pick the chain that should replace the local one, if any.
///
/// A candidate wins only by being strictly longer than everything seen so
/// far (starting from the local length) and passing full validation.
/// Equal-length candidates never win, and the local chain itself is never
/// validated. Iteration order cannot change the outcome: the running
/// maximum only ever strictly improves.
pub fn select_longest_valid(
    local_length: usize,
    snapshots: impl IntoIterator<Item = (String, ChainSnapshot)>,
) -> Option<Vec<Block>> {
    let mut max_length = local_length;
    let mut winner = None;

    for (peer, snapshot) in snapshots {
        // A reported length that disagrees with the blocks actually sent is
        // malformed; trusting it could swap in a shorter chain.
        if snapshot.length as usize != snapshot.chain.len() {
            warn!(
                "peer {} reported length {} but sent {} blocks, ignoring",
                peer,
                snapshot.length,
                snapshot.chain.len()
            );
            continue;
        }

        if snapshot.chain.len() <= max_length {
            debug!("peer {} chain is not longer ({} blocks)", peer, snapshot.chain.len());
            continue;
        }

        if !is_valid_chain(&snapshot.chain) {
            warn!("peer {} sent an invalid chain, ignoring", peer);
            continue;
        }

        max_length = snapshot.chain.len();
        winner = Some(snapshot.chain);
    }

    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::pow;
    use crate::ledger::Ledger;

    fn mined_chain(blocks: usize) -> Vec<Block> {
        let mut ledger = Ledger::new();
        while ledger.len() < blocks {
            let proof = pow::solve(ledger.last_block().proof);
            ledger.new_block(proof, None);
        }
        ledger.chain().to_vec()
    }

    fn snapshot(chain: Vec<Block>) -> ChainSnapshot {
        ChainSnapshot {
            length: chain.len() as u64,
            chain,
        }
    }

    #[test]
    fn test_longer_valid_chain_wins() {
        let peer_chain = mined_chain(3);
        let picked = select_longest_valid(
            1,
            vec![("10.0.0.1:5000".to_string(), snapshot(peer_chain.clone()))],
        );

        assert_eq!(picked, Some(peer_chain));
    }

    #[test]
    fn test_equal_length_never_wins() {
        let peer_chain = mined_chain(2);
        let picked = select_longest_valid(
            2,
            vec![("10.0.0.1:5000".to_string(), snapshot(peer_chain))],
        );

        assert!(picked.is_none());
    }

    #[test]
    fn test_invalid_chain_never_wins() {
        let mut peer_chain = mined_chain(3);
        peer_chain[2].proof = 0;

        let picked = select_longest_valid(
            1,
            vec![("10.0.0.1:5000".to_string(), snapshot(peer_chain))],
        );

        assert!(picked.is_none());
    }

    #[test]
    fn test_misreported_length_is_ignored() {
        let peer_chain = mined_chain(2);
        let lying = ChainSnapshot {
            length: 10,
            chain: peer_chain,
        };

        let picked = select_longest_valid(1, vec![("10.0.0.1:5000".to_string(), lying)]);

        assert!(picked.is_none());
    }

    #[test]
    fn test_longest_among_peers_wins_in_any_order() {
        let shorter = mined_chain(2);
        let longer = mined_chain(3);

        for candidates in [
            vec![
                ("a:1".to_string(), snapshot(shorter.clone())),
                ("b:1".to_string(), snapshot(longer.clone())),
            ],
            vec![
                ("b:1".to_string(), snapshot(longer.clone())),
                ("a:1".to_string(), snapshot(shorter.clone())),
            ],
        ] {
            assert_eq!(select_longest_valid(1, candidates), Some(longer.clone()));
        }
    }
}
