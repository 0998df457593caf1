//! Test utilities for seed peer discovery.
//!
//! Deterministic stand-ins for the driven ports. Enable with the
//! `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust,ignore
//! use seed_peers::test_utils::{FixedNetworkParameters, StubResolver};
//! use seed_peers::{HostResolver, NetworkParameters};
//!
//! let params = FixedNetworkParameters::new(18121);
//! assert_eq!(params.port(), 18121);
//!
//! let resolver = StubResolver::new().with_host("seed.test", vec!["10.0.0.1:1".parse().unwrap()]);
//! assert_eq!(resolver.resolve("seed.test", 18121).unwrap().len(), 1);
//! ```

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::{HostResolver, NetworkParameters};

/// Network parameters returning a fixed port.
#[derive(Debug, Clone, Copy)]
pub struct FixedNetworkParameters {
    port: u16,
}

impl FixedNetworkParameters {
    /// Create parameters with the given port.
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

impl NetworkParameters for FixedNetworkParameters {
    fn port(&self) -> u16 {
        self.port
    }
}

#[derive(Debug)]
enum StubAnswer {
    Addrs(Vec<SocketAddr>),
    Fail(io::ErrorKind),
}

/// Resolver answering from a fixed host table.
///
/// Unknown hosts fail with `io::ErrorKind::NotFound`. Every call is
/// counted, so tests can check which entries reached the resolver.
#[derive(Debug, Default)]
pub struct StubResolver {
    answers: HashMap<String, StubAnswer>,
    calls: AtomicUsize,
}

impl StubResolver {
    /// Resolver that knows no hosts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `host` with `addrs` (ports are whatever the test supplies).
    #[must_use]
    pub fn with_host(mut self, host: &str, addrs: Vec<SocketAddr>) -> Self {
        self.answers.insert(host.to_string(), StubAnswer::Addrs(addrs));
        self
    }

    /// Fail lookups of `host` with `kind`.
    #[must_use]
    pub fn with_failure(mut self, host: &str, kind: io::ErrorKind) -> Self {
        self.answers.insert(host.to_string(), StubAnswer::Fail(kind));
        self
    }

    /// Number of `resolve` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HostResolver for StubResolver {
    fn resolve(&self, host: &str, _port: u16) -> io::Result<Vec<SocketAddr>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.answers.get(host) {
            Some(StubAnswer::Addrs(addrs)) => Ok(addrs.clone()),
            Some(StubAnswer::Fail(kind)) => {
                Err(io::Error::new(*kind, format!("stub failure for {host}")))
            }
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("unknown host {host}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_resolver_counts_calls() {
        let resolver = StubResolver::new()
            .with_host("a.test", vec!["10.0.0.1:1".parse().unwrap()])
            .with_failure("b.test", io::ErrorKind::TimedOut);

        assert!(resolver.resolve("a.test", 1).is_ok());
        assert_eq!(
            resolver.resolve("b.test", 1).unwrap_err().kind(),
            io::ErrorKind::TimedOut
        );
        assert_eq!(
            resolver.resolve("c.test", 1).unwrap_err().kind(),
            io::ErrorKind::NotFound
        );
        assert_eq!(resolver.calls(), 3);
    }
}
