//! ipdossier Core - Record types and merge logic for IP enrichment
//!
//! This crate provides the foundational primitives:
//! - The shared `Desconocido` (Unknown) sentinel every probe reports through
//! - Geolocation, registration and final enrichment record types
//! - The WHOIS/RDAP registration reconciler
//! - The fixed 14-column presentation layer

pub mod records;
pub mod merge;
pub mod render;

pub use records::*;
pub use merge::*;
pub use render::*;

/// The single canonical "no data" value. Every rendered field is either a
/// concrete non-empty string or exactly this sentinel.
pub const UNKNOWN: &str = "Desconocido";

/// Port-scan summary when no candidate port accepted a connection
pub const NO_OPEN_PORTS: &str = "Ninguno";

/// Returns true when a value carries no usable data: blank after trimming,
/// or the Unknown sentinel itself (case-insensitive).
pub fn is_unknown(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNKNOWN)
}
