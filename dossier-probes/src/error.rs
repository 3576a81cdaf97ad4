//! Probe failure taxonomy
//!
//! Never escapes a probe's public surface; lookups log the error at debug
//! level and report the Unknown/absent state instead.

use thiserror::Error;

/// Errors from probe operations
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("process error: {0}")]
    Process(#[from] std::io::Error),

    #[error("process exited with {0}")]
    ExitStatus(std::process::ExitStatus),

    #[error("timed out after {0} seconds")]
    Timeout(u64),

    #[error("lookup answered with failure status: {0}")]
    FailureStatus(String),

    #[error("resolution failed: {0}")]
    Resolve(String),

    #[error("parse error: {0}")]
    Parse(String),
}
