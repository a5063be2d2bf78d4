//! P2P module - peer registry and peer chain fetching

mod client;
mod registry;

pub use client::*;
pub use registry::*;
