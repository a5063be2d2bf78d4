//! Peer registry
//!
//! Tracks the set of known peer network locations. Additive only; there is
//! no removal or liveness checking.

use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("peer address has no host component: {0:?}")]
    MissingHost(String),
}

/// Deduplicated set of peer netlocs (`host` or `host:port`).
#[derive(Debug, Default)]
pub struct PeerRegistry {
    peers: HashSet<String>,
}

impl PeerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a peer by address.
    ///
    /// The address is reduced to its netloc: scheme and anything from the
    /// path onward are stripped, and a bare `host:port` is accepted as
    /// already being a netloc. Re-registering a known peer is a no-op.
    pub fn register(&mut self, address: &str) -> Result<(), RegistryError> {
        let netloc = extract_netloc(address);
        if netloc.is_empty() {
            return Err(RegistryError::MissingHost(address.to_string()));
        }
        self.peers.insert(netloc);
        Ok(())
    }

    /// All known peers, sorted for stable output.
    pub fn addresses(&self) -> Vec<String> {
        let mut addresses: Vec<String> = self.peers.iter().cloned().collect();
        addresses.sort();
        addresses
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}

/// Reduce an address to its network-location component.
fn extract_netloc(address: &str) -> String {
    let address = address.trim();
    let rest = match address.find("://") {
        Some(at) => &address[at + 3..],
        None => address,
    };
    let end = rest
        .find(|c| c == '/' || c == '?' || c == '#')
        .unwrap_or(rest.len());
    rest[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_extracts_netloc() {
        let mut registry = PeerRegistry::new();
        registry.register("http://10.0.0.1:5000").unwrap();

        assert_eq!(registry.addresses(), vec!["10.0.0.1:5000".to_string()]);
    }

    #[test]
    fn test_trailing_slash_registers_same_peer() {
        let mut registry = PeerRegistry::new();
        registry.register("http://10.0.0.1:5000").unwrap();
        registry.register("http://10.0.0.1:5000/").unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.addresses(), vec!["10.0.0.1:5000".to_string()]);
    }

    #[test]
    fn test_path_is_stripped() {
        let mut registry = PeerRegistry::new();
        registry.register("http://node.example:8080/chain?full=1").unwrap();

        assert_eq!(registry.addresses(), vec!["node.example:8080".to_string()]);
    }

    #[test]
    fn test_bare_netloc_is_accepted() {
        let mut registry = PeerRegistry::new();
        registry.register("10.0.0.2:5000").unwrap();

        assert_eq!(registry.addresses(), vec!["10.0.0.2:5000".to_string()]);
    }

    #[test]
    fn test_empty_address_is_rejected() {
        let mut registry = PeerRegistry::new();

        assert!(registry.register("").is_err());
        assert!(registry.register("http:///path-only").is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registration_is_additive_and_deduplicated() {
        let mut registry = PeerRegistry::new();
        registry.register("http://a:1").unwrap();
        registry.register("http://b:2").unwrap();
        registry.register("http://a:1").unwrap();

        assert_eq!(registry.len(), 2);
    }
}
