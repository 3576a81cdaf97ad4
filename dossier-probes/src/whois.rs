//! WHOIS registration probe
//!
//! Runs the system `whois` client as a scoped subprocess and classifies
//! its line-oriented `key: value` output through a fixed synonym table.
//! Later lines overwrite earlier ones for the same logical field. Any
//! process failure yields an empty record.

use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use dossier_core::RegistrationRecord;

use crate::{ProbeConfig, ProbeError, RegistrationSource};

const NAME_KEYS: [&str; 6] = [
    "orgname",
    "organization",
    "owner",
    "netname",
    "descr",
    "responsible",
];
const CREATION_KEYS: [&str; 4] = ["created", "creation date", "registered", "regdate"];
const REGISTRAR_KEYS: [&str; 1] = ["registrar"];

/// Client for textual registry lookups
pub struct WhoisClient {
    timeout_secs: u64,
}

impl WhoisClient {
    pub fn new(config: &ProbeConfig) -> Self {
        Self {
            timeout_secs: config.whois_timeout_secs,
        }
    }

    async fn query(&self, ip: &str) -> Result<String, ProbeError> {
        let mut command = Command::new("whois");
        command.arg(ip).kill_on_drop(true);

        let output = timeout(Duration::from_secs(self.timeout_secs), command.output())
            .await
            .map_err(|_| ProbeError::Timeout(self.timeout_secs))??;
        if !output.status.success() {
            return Err(ProbeError::ExitStatus(output.status));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl RegistrationSource for WhoisClient {
    fn id(&self) -> &'static str {
        "whois"
    }

    async fn lookup(&self, ip: &str) -> RegistrationRecord {
        match self.query(ip).await {
            Ok(output) => parse_whois_output(&output),
            Err(e) => {
                debug!("whois lookup for {} failed: {}", ip, e);
                RegistrationRecord::default()
            }
        }
    }
}

/// Classify raw `whois` output into registration fields. Keys match
/// case-insensitively; the value keeps any further colons intact.
pub fn parse_whois_output(output: &str) -> RegistrationRecord {
    let mut record = RegistrationRecord::default();
    for line in output.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if NAME_KEYS.contains(&key.as_str()) {
            record.name = Some(value.to_string());
        } else if CREATION_KEYS.contains(&key.as_str()) {
            record.creation = Some(value.to_string());
        } else if REGISTRAR_KEYS.contains(&key.as_str()) {
            record.registrar = Some(value.to_string());
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synonym_classification() {
        let output = "\
NetName: EXAMPLE-NET
RegDate: 1997-05-01
Registrar: Example Registrar Inc.
";
        let record = parse_whois_output(output);
        assert_eq!(record.name.as_deref(), Some("EXAMPLE-NET"));
        assert_eq!(record.creation.as_deref(), Some("1997-05-01"));
        assert_eq!(record.registrar.as_deref(), Some("Example Registrar Inc."));
        assert!(record.organization.is_none());
    }

    #[test]
    fn test_keys_match_case_insensitively() {
        let record = parse_whois_output("ORGNAME:   Acme Corporation\n");
        assert_eq!(record.name.as_deref(), Some("Acme Corporation"));
    }

    #[test]
    fn test_last_value_wins() {
        let output = "\
OrgName: First Org
descr: Second Org
";
        let record = parse_whois_output(output);
        assert_eq!(record.name.as_deref(), Some("Second Org"));
    }

    #[test]
    fn test_value_colons_are_preserved() {
        let record = parse_whois_output("descr: Acme: Networks Division\n");
        assert_eq!(record.name.as_deref(), Some("Acme: Networks Division"));
    }

    #[test]
    fn test_unrelated_and_comment_lines_are_ignored() {
        let output = "\
% This is a RIPE comment
country: NL
no colon here
";
        let record = parse_whois_output(output);
        assert!(record.is_empty());
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let record = parse_whois_output("netname:\n");
        assert!(record.name.is_none());
    }
}
