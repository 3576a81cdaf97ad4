//! Enrichment record types
//!
//! One `EnrichmentRecord` is assembled per input IP after every probe has
//! resolved. Probe outputs are normalized here: a field is a concrete
//! non-empty string or the [`UNKNOWN`](crate::UNKNOWN) sentinel, never an
//! empty string masquerading as data.

use serde::{Deserialize, Serialize};

use crate::{NO_OPEN_PORTS, UNKNOWN};

/// Basic connectivity status from the echo probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reachability {
    Reachable,
    Unreachable,
}

impl Reachability {
    /// User-facing label; part of the fixed output vocabulary
    pub fn label(&self) -> &'static str {
        match self {
            Reachability::Reachable => "Conectado",
            Reachability::Unreachable => "Sin conexión",
        }
    }
}

/// Geolocation data for one IP, produced atomically: on any lookup failure
/// every field is the sentinel, never a partial mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub country: String,
    /// Captured from the service but not part of the 14 output columns
    pub region: String,
    pub city: String,
    pub isp: String,
    pub org: String,
    pub asn: String,
    /// Literal "lat,lon" concatenation; a missing component stays an empty
    /// sub-string inside the pair rather than becoming the sentinel
    pub lat_lon: String,
}

impl GeoRecord {
    /// The atomic failure value: all seven fields unknown
    pub fn unknown() -> Self {
        Self {
            country: UNKNOWN.to_string(),
            region: UNKNOWN.to_string(),
            city: UNKNOWN.to_string(),
            isp: UNKNOWN.to_string(),
            org: UNKNOWN.to_string(),
            asn: UNKNOWN.to_string(),
            lat_lon: UNKNOWN.to_string(),
        }
    }
}

/// Raw registration data as extracted from one source (RDAP or WHOIS).
///
/// `None` means the source did not supply the field. Sources never store
/// the sentinel here; the reconciler nevertheless tolerates one and treats
/// it as absent, so a sloppy upstream value can never shadow real data
/// from the other source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub name: Option<String>,
    pub organization: Option<String>,
    pub creation: Option<String>,
    pub registrar: Option<String>,
}

impl RegistrationRecord {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_organization(mut self, organization: &str) -> Self {
        self.organization = Some(organization.to_string());
        self
    }

    pub fn with_creation(mut self, creation: &str) -> Self {
        self.creation = Some(creation.to_string());
        self
    }

    pub fn with_registrar(mut self, registrar: &str) -> Self {
        self.registrar = Some(registrar.to_string());
        self
    }

    /// True when the source produced nothing at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.organization.is_none()
            && self.creation.is_none()
            && self.registrar.is_none()
    }
}

/// Merged ownership data; always fully populated, each field concrete or
/// the sentinel. Produced by [`merge::reconcile`](crate::merge::reconcile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledRegistration {
    pub name: String,
    pub organization: String,
    pub creation: String,
    pub registrar: String,
}

/// The final per-IP row. Assembled once after all probes resolve; never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentRecord {
    pub ip: String,
    pub status: Reachability,
    pub geo: GeoRecord,
    /// Reverse-DNS hostname, or the sentinel
    pub ptr: String,
    pub registration: ReconciledRegistration,
    /// Comma-joined open ports in ascending candidate order, or "Ninguno"
    pub ports: String,
}

/// Joins open ports into the summary string: ascending candidate order,
/// comma-separated, or the "Ninguno" sentinel when the list is empty.
pub fn summarize_ports(open: &[u16]) -> String {
    if open.is_empty() {
        return NO_OPEN_PORTS.to_string();
    }
    open.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
