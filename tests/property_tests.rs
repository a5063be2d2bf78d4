//! Property-based tests for the nanochain ledger
//!
//! These verify the core invariants hold under random inputs.

use proptest::prelude::*;

use nanochain::consensus::{is_valid_chain, pow};
use nanochain::ledger::{Block, Ledger, Transaction};

proptest! {
    // Proof searches are CPU-bound, so keep the mined cases small.
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// solve always satisfies verify and is reproducible
    #[test]
    fn prop_solve_satisfies_verify(previous in 0u64..32) {
        let proof = pow::solve(previous);
        prop_assert!(pow::verify(previous, proof));
        prop_assert_eq!(proof, pow::solve(previous));
    }

    /// Queueing then mining drains the pool into the block, in order
    #[test]
    fn prop_mining_drains_pool_in_order(
        amounts in proptest::collection::vec(0.0f64..1000.0, 0..6)
    ) {
        let mut ledger = Ledger::new();
        for (i, amount) in amounts.iter().enumerate() {
            ledger.queue_transaction(&format!("s{}", i), "pool", *amount);
        }

        let proof = pow::solve(ledger.last_block().proof);
        let block = ledger.new_block(proof, None).clone();

        prop_assert_eq!(block.transactions.len(), amounts.len());
        for (i, tx) in block.transactions.iter().enumerate() {
            prop_assert_eq!(&tx.sender, &format!("s{}", i));
            prop_assert_eq!(tx.amount, amounts[i]);
        }
        prop_assert!(ledger.pending().is_empty());
        prop_assert!(is_valid_chain(ledger.chain()));
    }

    /// Chains built purely from mined appends always validate, with
    /// contiguous 1-based indices
    #[test]
    fn prop_appended_chains_validate(extra_blocks in 1usize..3) {
        let mut ledger = Ledger::new();
        for _ in 0..extra_blocks {
            let proof = pow::solve(ledger.last_block().proof);
            ledger.new_block(proof, None);
        }

        prop_assert!(is_valid_chain(ledger.chain()));
        prop_assert_eq!(ledger.len(), extra_blocks + 1);
        for (i, block) in ledger.chain().iter().enumerate() {
            prop_assert_eq!(block.index as usize, i + 1);
        }
    }
}

proptest! {
    /// Digests are deterministic and survive a wire round-trip
    #[test]
    fn prop_digest_deterministic(
        index in 1u64..10_000,
        proof in 0u64..1_000_000,
        timestamp in 0.0f64..2_000_000_000.0,
        sender in "[a-z]{1,8}",
        recipient in "[a-z]{1,8}",
        amount in 0.0f64..1000.0,
    ) {
        let block = Block {
            index,
            timestamp,
            transactions: vec![Transaction::new(sender, recipient, amount)],
            proof,
            previous_hash: "abc".to_string(),
        };

        prop_assert_eq!(block.digest(), block.clone().digest());

        let round_tripped: Block =
            serde_json::from_str(&serde_json::to_string(&block).unwrap()).unwrap();
        prop_assert_eq!(round_tripped.digest(), block.digest());
    }

    /// Blocks differing in proof digest differently
    #[test]
    fn prop_digest_distinguishes_blocks(
        proof in 0u64..1_000_000,
        delta in 1u64..1_000,
    ) {
        let base = Block {
            index: 1,
            timestamp: 0.0,
            transactions: vec![],
            proof,
            previous_hash: "1".to_string(),
        };
        let mut other = base.clone();
        other.proof = proof + delta;

        prop_assert_ne!(base.digest(), other.digest());
    }
}
