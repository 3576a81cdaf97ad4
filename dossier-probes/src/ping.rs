//! Reachability probe
//!
//! One system echo request per IP through a scoped subprocess. The child
//! is killed on drop and bounded by an outer guard timeout, so a wedged
//! `ping` binary cannot hold the pipeline. This probe never raises: any
//! spawn error, non-zero exit or timeout reads as unreachable.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use dossier_core::Reachability;

use crate::{ProbeConfig, ProbeError};

/// Send one echo request and classify the host
pub async fn ping(ip: &str, config: &ProbeConfig) -> Reachability {
    match run_ping(ip, config).await {
        Ok(true) => Reachability::Reachable,
        Ok(false) => Reachability::Unreachable,
        Err(e) => {
            debug!("ping {} failed: {}", ip, e);
            Reachability::Unreachable
        }
    }
}

async fn run_ping(ip: &str, config: &ProbeConfig) -> Result<bool, ProbeError> {
    let wait = config.ping_timeout_secs;
    let mut command = Command::new("ping");
    command
        .args(["-c", "1", "-W", &wait.to_string(), ip])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);

    // Guard above ping's own -W so a stuck binary still gets reaped
    let guard = Duration::from_secs(wait.saturating_mul(2).max(1));
    let status = timeout(guard, command.status())
        .await
        .map_err(|_| ProbeError::Timeout(guard.as_secs()))??;
    Ok(status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_host_is_unreachable() {
        // ping rejects the name immediately; must map to Unreachable, not panic
        let config = ProbeConfig::default().with_ping_timeout(1);
        let status = ping("definitely-not-an-ip", &config).await;
        assert_eq!(status, Reachability::Unreachable);
    }

    #[tokio::test]
    #[ignore]
    async fn test_loopback_is_reachable() {
        let status = ping("127.0.0.1", &ProbeConfig::default()).await;
        assert_eq!(status, Reachability::Reachable);
    }
}
