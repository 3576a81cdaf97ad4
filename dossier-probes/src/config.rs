//! Per-probe timeout configuration

/// Timeouts for every probe, enforced independently per invocation
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Echo request wait, in seconds (also the `ping -W` value)
    pub ping_timeout_secs: u64,
    /// Geolocation HTTP request timeout, in seconds
    pub geo_timeout_secs: u64,
    /// RDAP HTTP request timeout, in seconds
    pub rdap_timeout_secs: u64,
    /// WHOIS subprocess timeout, in seconds
    pub whois_timeout_secs: u64,
    /// Per-port TCP connect timeout, in milliseconds
    pub port_timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ping_timeout_secs: 2,
            geo_timeout_secs: 5,
            rdap_timeout_secs: 10,
            whois_timeout_secs: 10,
            port_timeout_ms: 1_000,
        }
    }
}

impl ProbeConfig {
    pub fn with_ping_timeout(mut self, secs: u64) -> Self {
        self.ping_timeout_secs = secs;
        self
    }

    pub fn with_whois_timeout(mut self, secs: u64) -> Self {
        self.whois_timeout_secs = secs;
        self
    }

    pub fn with_port_timeout(mut self, millis: u64) -> Self {
        self.port_timeout_ms = millis;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProbeConfig::default();
        assert_eq!(config.ping_timeout_secs, 2);
        assert_eq!(config.geo_timeout_secs, 5);
        assert_eq!(config.whois_timeout_secs, 10);
        assert_eq!(config.port_timeout_ms, 1_000);
    }

    #[test]
    fn test_builders() {
        let config = ProbeConfig::default()
            .with_ping_timeout(1)
            .with_port_timeout(250);
        assert_eq!(config.ping_timeout_secs, 1);
        assert_eq!(config.port_timeout_ms, 250);
    }
}
