//! Mining module - interruptible proof-of-work search

mod miner;

pub use miner::*;
