//! Geolocation probe
//!
//! One GET against the ip-api.com JSON endpoint with a fixed field set.
//! Failure is atomic: a transport error, non-success status or malformed
//! body yields a fully-Unknown [`GeoRecord`], never a partial one.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use dossier_core::{GeoRecord, UNKNOWN};

use crate::{ProbeConfig, ProbeError};

const GEO_ENDPOINT: &str = "http://ip-api.com/json";
const GEO_FIELDS: &str = "status,country,regionName,city,isp,org,as,lat,lon";

/// ip-api.com lookup payload
#[derive(Debug, Deserialize)]
struct GeoResponse {
    status: Option<String>,
    country: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    city: Option<String>,
    isp: Option<String>,
    org: Option<String>,
    #[serde(rename = "as")]
    asn: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Client for the geolocation service
pub struct GeoClient {
    http: Client,
}

impl GeoClient {
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.geo_timeout_secs))
            .build()?;
        Ok(Self { http })
    }

    /// Look up geolocation data; any failure reads as a fully-Unknown record
    pub async fn lookup(&self, ip: &str) -> GeoRecord {
        match self.fetch(ip).await {
            Ok(record) => record,
            Err(e) => {
                debug!("geo lookup for {} failed: {}", ip, e);
                GeoRecord::unknown()
            }
        }
    }

    async fn fetch(&self, ip: &str) -> Result<GeoRecord, ProbeError> {
        let url = format!("{}/{}?fields={}", GEO_ENDPOINT, ip, GEO_FIELDS);
        let body = self.http.get(&url).send().await?.text().await?;
        record_from_body(&body)
    }
}

/// Parse a response body into a record. Split out from the HTTP path so
/// the failure-status and field-default rules are unit-testable.
fn record_from_body(body: &str) -> Result<GeoRecord, ProbeError> {
    let response: GeoResponse =
        serde_json::from_str(body).map_err(|e| ProbeError::Parse(e.to_string()))?;
    if response.status.as_deref() != Some("success") {
        return Err(ProbeError::FailureStatus(
            response.status.unwrap_or_else(|| "missing".to_string()),
        ));
    }
    Ok(GeoRecord {
        country: field_or_unknown(response.country),
        region: field_or_unknown(response.region_name),
        city: field_or_unknown(response.city),
        isp: field_or_unknown(response.isp),
        org: field_or_unknown(response.org),
        asn: field_or_unknown(response.asn),
        // A missing component stays empty inside the pair, never the sentinel
        lat_lon: format!("{},{}", coord(response.lat), coord(response.lon)),
    })
}

fn field_or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN.to_string())
}

fn coord(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_maps_all_fields() {
        let body = r#"{
            "status": "success",
            "country": "Australia",
            "regionName": "Queensland",
            "city": "South Brisbane",
            "isp": "Cloudflare, Inc",
            "org": "APNIC and Cloudflare DNS Resolver project",
            "as": "AS13335 Cloudflare, Inc.",
            "lat": -27.4766,
            "lon": 153.0166
        }"#;
        let record = record_from_body(body).unwrap();
        assert_eq!(record.country, "Australia");
        assert_eq!(record.region, "Queensland");
        assert_eq!(record.asn, "AS13335 Cloudflare, Inc.");
        assert_eq!(record.lat_lon, "-27.4766,153.0166");
    }

    #[test]
    fn test_failure_status_is_an_error() {
        let body = r#"{"status": "fail"}"#;
        assert!(record_from_body(body).is_err());
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(record_from_body("not json").is_err());
    }

    #[test]
    fn test_missing_fields_default_to_unknown() {
        let body = r#"{"status": "success", "country": "Australia"}"#;
        let record = record_from_body(body).unwrap();
        assert_eq!(record.country, "Australia");
        assert_eq!(record.city, UNKNOWN);
        assert_eq!(record.isp, UNKNOWN);
    }

    #[test]
    fn test_missing_coords_leave_empty_components() {
        let body = r#"{"status": "success", "lat": -27.4766}"#;
        let record = record_from_body(body).unwrap();
        assert_eq!(record.lat_lon, "-27.4766,");

        let body = r#"{"status": "success"}"#;
        let record = record_from_body(body).unwrap();
        assert_eq!(record.lat_lon, ",");
    }
}
