//! DNS record payloads.

use serde::{Deserialize, Serialize};

/// Options submitted when creating or updating a DNS record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecordOpts {
    pub dns_zone_id: u32,
    pub subdomain_name: String,
    /// Nested JSON string of the form `{"appId": N}` pointing the record at
    /// a DNS application.
    #[serde(rename = "response")]
    pub app_response: String,
    pub record_type: String,
    pub ttl: u32,
}

impl DnsRecordOpts {
    /// Record options routing a subdomain to the DNS application `app_id`.
    pub fn new(
        dns_zone_id: u32,
        subdomain_name: impl Into<String>,
        app_id: u32,
        record_type: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            dns_zone_id,
            subdomain_name: subdomain_name.into(),
            app_response: format!("{{\"appId\":{app_id}}}"),
            record_type: record_type.into(),
            ttl,
        }
    }
}

/// An existing DNS record as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DnsRecord {
    pub id: u32,
    pub dns_zone_id: u32,
    pub subdomain_name: String,
    #[serde(rename = "response")]
    pub app_response: String,
    pub record_type: String,
    pub ttl: u32,
}
