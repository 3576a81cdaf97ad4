//! Reverse-DNS probe
//!
//! PTR lookup through a shared async resolver. Any failure (no PTR
//! record, timeout, malformed address) reads as the Unknown sentinel.

use std::net::IpAddr;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use tracing::debug;

use dossier_core::UNKNOWN;

use crate::ProbeError;

/// PTR resolver, built once and shared across lookups
pub struct ReverseDns {
    resolver: TokioAsyncResolver,
}

impl Default for ReverseDns {
    fn default() -> Self {
        Self::new()
    }
}

impl ReverseDns {
    pub fn new() -> Self {
        Self {
            resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default()),
        }
    }

    /// Resolve a hostname for the IP, or the Unknown sentinel
    pub async fn lookup(&self, ip: &str) -> String {
        match self.resolve(ip).await {
            Ok(hostname) => hostname,
            Err(e) => {
                debug!("reverse lookup for {} failed: {}", ip, e);
                UNKNOWN.to_string()
            }
        }
    }

    async fn resolve(&self, ip: &str) -> Result<String, ProbeError> {
        let addr: IpAddr = ip
            .parse()
            .map_err(|_| ProbeError::Parse(format!("invalid IP address: {ip}")))?;
        let response = self
            .resolver
            .reverse_lookup(addr)
            .await
            .map_err(|e| ProbeError::Resolve(e.to_string()))?;
        let name = response
            .iter()
            .next()
            .ok_or_else(|| ProbeError::Resolve("empty PTR answer".to_string()))?;
        Ok(name.to_string().trim_end_matches('.').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_address_is_unknown() {
        let rdns = ReverseDns::new();
        assert_eq!(rdns.lookup("not-an-ip").await, UNKNOWN);
    }

    #[tokio::test]
    #[ignore]
    async fn test_known_resolver_has_ptr() {
        let rdns = ReverseDns::new();
        let hostname = rdns.lookup("1.1.1.1").await;
        assert_ne!(hostname, UNKNOWN);
        assert!(!hostname.ends_with('.'));
    }
}
