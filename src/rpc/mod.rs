//! HTTP API module
//!
//! Exposes the node's operations over HTTP: mining, transaction submission,
//! chain reads, peer registration, and consensus resolution.

mod methods;
mod server;

pub use methods::*;
pub use server::*;
