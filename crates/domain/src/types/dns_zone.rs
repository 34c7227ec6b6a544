//! Authoritative DNS zone payloads.

use serde::{Deserialize, Serialize};

/// Options submitted when creating or updating a DNS zone.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsZoneOpts {
    pub is_primary: bool,
    pub domain_name: String,
    pub description: String,
}

impl DnsZoneOpts {
    /// Zone options for a primary zone with the given domain name.
    pub fn new(domain_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            is_primary: true,
            domain_name: domain_name.into(),
            description: description.into(),
        }
    }
}

/// An existing DNS zone as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DnsZone {
    pub id: u32,
    pub is_primary: bool,
    pub domain_name: String,
    pub description: String,
    /// Records attached to the zone, kept as raw JSON objects; the record
    /// service owns the typed representation.
    pub records: Vec<serde_json::Value>,
}
