//! ipdossier Runtime
//!
//! Drives the enrichment pipeline:
//! - Input parsing (IP file or inline list)
//! - Per-IP probe fan-out and registration reconciliation
//! - Bounded concurrency across IPs with input-order output

pub mod pipeline;
pub mod targets;

pub use pipeline::*;
pub use targets::*;
