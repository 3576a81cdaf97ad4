//! ipdossier Probes
//!
//! One probe per enrichment concern:
//! - **ping**: basic reachability via the system echo utility
//! - **geo**: geolocation fields from the ip-api.com JSON service
//! - **rdns**: reverse-DNS (PTR) hostname resolution
//! - **rdap**: structured registration lookup for the IP's network block
//! - **whois**: textual registry lookup via the system `whois` client
//! - **ports**: TCP connect scan over a fixed well-known port list
//!
//! Probes absorb their own failures: every public lookup returns data or
//! the Unknown/absent state, never an error. [`ProbeError`] exists for the
//! internal fallible paths and for logging.

pub mod config;
pub mod error;
pub mod ping;
pub mod geo;
pub mod rdns;
pub mod registration;
pub mod rdap;
pub mod whois;
pub mod ports;

pub use config::*;
pub use error::*;
pub use ping::*;
pub use geo::*;
pub use rdns::*;
pub use registration::*;
pub use rdap::*;
pub use whois::*;
pub use ports::*;
