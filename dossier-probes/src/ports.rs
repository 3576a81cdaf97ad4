//! TCP port scan probe
//!
//! Direct connect attempts against a fixed well-known candidate list.
//! Ports are probed concurrently but results keep candidate order, so the
//! summary is ascending no matter which connection settles first. Refused,
//! timed out and unreachable are all just "closed".

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use futures::future::join_all;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use crate::ProbeConfig;

/// The fixed candidate port list, ascending
pub const CANDIDATE_PORTS: [u16; 14] = [
    21, 22, 23, 25, 53, 80, 110, 143, 443, 3306, 3389, 5900, 8080, 8081,
];

/// Probe every candidate port; returns the open ones in candidate order
pub async fn scan_ports(ip: &str, config: &ProbeConfig) -> Vec<u16> {
    let addr: IpAddr = match ip.parse() {
        Ok(addr) => addr,
        Err(_) => {
            debug!("port scan skipped, invalid IP: {}", ip);
            return Vec::new();
        }
    };

    let limit = Duration::from_millis(config.port_timeout_ms);
    let probes = CANDIDATE_PORTS
        .iter()
        .map(|&port| async move { probe_port(addr, port, limit).await.then_some(port) });

    // join_all keeps input order, which is the candidate order
    join_all(probes).await.into_iter().flatten().collect()
}

async fn probe_port(addr: IpAddr, port: u16, limit: Duration) -> bool {
    let socket_addr = SocketAddr::new(addr, port);
    // The stream is dropped immediately; connect success is all we record
    matches!(
        timeout(limit, TcpStream::connect(socket_addr)).await,
        Ok(Ok(_))
    )
}
