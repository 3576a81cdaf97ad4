//! Enrichment pipeline
//!
//! For each input IP the six probes run concurrently, their outputs are
//! reconciled and assembled into one [`EnrichmentRecord`]. Across IPs the
//! pipeline runs as a buffered stream: concurrency is bounded by the
//! configured width and output order always equals input order, no matter
//! which IP finishes first. A record is only emitted once every one of
//! its probes has resolved.

use futures::stream::{self, StreamExt};
use tracing::{debug, info};

use dossier_core::{merge::reconcile, summarize_ports, EnrichmentRecord};
use dossier_probes::{
    ping, scan_ports, GeoClient, ProbeConfig, RdapClient, RegistrationSource, ReverseDns,
    WhoisClient,
};

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Per-probe timeouts
    pub probe: ProbeConfig,
    /// How many IPs are enriched at once; the reference behavior is
    /// sequential, so the default width is 1
    pub concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            probe: ProbeConfig::default(),
            concurrency: 1,
        }
    }
}

impl PipelineConfig {
    pub fn with_concurrency(mut self, width: usize) -> Self {
        self.concurrency = width.max(1);
        self
    }
}

/// The enrichment pipeline; clients and resolver are built once
pub struct Pipeline {
    probe_config: ProbeConfig,
    concurrency: usize,
    geo: GeoClient,
    rdap: RdapClient,
    whois: WhoisClient,
    rdns: ReverseDns,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> anyhow::Result<Self> {
        let geo = GeoClient::new(&config.probe)?;
        let rdap = RdapClient::new(&config.probe)?;
        let whois = WhoisClient::new(&config.probe);
        Ok(Self {
            geo,
            rdap,
            whois,
            rdns: ReverseDns::new(),
            concurrency: config.concurrency.max(1),
            probe_config: config.probe,
        })
    }

    /// Enrich every IP; the result vector matches the input order
    pub async fn run(&self, ips: &[String]) -> Vec<EnrichmentRecord> {
        info!("enriching {} address(es), width {}", ips.len(), self.concurrency);
        stream::iter(ips)
            .map(|ip| self.enrich_one(ip))
            .buffered(self.concurrency)
            .collect()
            .await
    }

    /// Run all probes for one IP and assemble its record
    pub async fn enrich_one(&self, ip: &str) -> EnrichmentRecord {
        debug!("probing {}", ip);
        let (status, geo, ptr, whois, rdap, open_ports) = tokio::join!(
            ping(ip, &self.probe_config),
            self.geo.lookup(ip),
            self.rdns.lookup(ip),
            self.whois.lookup(ip),
            self.rdap.lookup(ip),
            scan_ports(ip, &self.probe_config),
        );

        let registration = reconcile(&whois, &rdap);
        EnrichmentRecord {
            ip: ip.to_string(),
            status,
            geo,
            ptr,
            registration,
            ports: summarize_ports(&open_ports),
        }
    }
}
