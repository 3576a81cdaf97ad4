//! RDAP registration probe
//!
//! Queries the rdap.org bootstrap, which redirects to the RIR that owns
//! the block. Extraction reduces structured values to one representative
//! string each: the network name, the first remark (first description
//! line, else its title), the first lifecycle event's date, and the
//! registry that served the answer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use dossier_core::RegistrationRecord;

use crate::{ProbeConfig, ProbeError, RegistrationSource};

const RDAP_BOOTSTRAP: &str = "https://rdap.org/ip";

/// Known registry identifiers, matched against the serving host
const REGISTRIES: [&str; 5] = ["arin", "ripe", "apnic", "lacnic", "afrinic"];

/// RDAP IP network object (the relevant subset)
#[derive(Debug, Deserialize)]
struct RdapNetwork {
    name: Option<String>,
    remarks: Option<Vec<RdapRemark>>,
    events: Option<Vec<RdapEvent>>,
}

#[derive(Debug, Deserialize)]
struct RdapRemark {
    title: Option<String>,
    description: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RdapEvent {
    #[serde(rename = "eventDate")]
    event_date: Option<String>,
}

/// Client for structured registry lookups
pub struct RdapClient {
    http: Client,
}

impl RdapClient {
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.rdap_timeout_secs))
            .build()?;
        Ok(Self { http })
    }

    async fn fetch(&self, ip: &str) -> Result<RegistrationRecord, ProbeError> {
        let url = format!("{}/{}", RDAP_BOOTSTRAP, ip);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProbeError::FailureStatus(response.status().to_string()));
        }
        // The bootstrap redirect lands on the serving RIR; its hostname
        // identifies the registry
        let registry = response.url().host_str().and_then(registry_from_host);
        let body = response.text().await?;
        extract(&body, registry)
    }
}

#[async_trait]
impl RegistrationSource for RdapClient {
    fn id(&self) -> &'static str {
        "rdap"
    }

    async fn lookup(&self, ip: &str) -> RegistrationRecord {
        match self.fetch(ip).await {
            Ok(record) => record,
            Err(e) => {
                debug!("rdap lookup for {} failed: {}", ip, e);
                RegistrationRecord::default()
            }
        }
    }
}

/// Map the serving RDAP host to a registry identifier. RIPE answers from
/// `rdap.db.ripe.net`, hence the substring match; unknown hosts fall back
/// to their second label.
fn registry_from_host(host: &str) -> Option<String> {
    for registry in REGISTRIES {
        if host.contains(registry) {
            if registry == "ripe" {
                return Some("ripencc".to_string());
            }
            return Some(registry.to_string());
        }
    }
    host.split('.').nth(1).map(|label| label.to_string())
}

fn extract(body: &str, registry: Option<String>) -> Result<RegistrationRecord, ProbeError> {
    let network: RdapNetwork =
        serde_json::from_str(body).map_err(|e| ProbeError::Parse(e.to_string()))?;

    let organization = network
        .remarks
        .as_ref()
        .and_then(|remarks| remarks.first())
        .and_then(reduce_remark);
    let creation = network
        .events
        .as_ref()
        .and_then(|events| events.first())
        .and_then(|event| event.event_date.clone());

    Ok(RegistrationRecord {
        name: network.name,
        organization,
        creation,
        registrar: registry,
    })
}

/// Reduce a structured remark to one representative string: the first
/// description line when there is one, else the title
fn reduce_remark(remark: &RdapRemark) -> Option<String> {
    remark
        .description
        .as_ref()
        .and_then(|lines| lines.first())
        .or(remark.title.as_ref())
        .cloned()
}
