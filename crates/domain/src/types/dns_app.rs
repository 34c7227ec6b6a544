//! DNS application payloads.
//!
//! The write side ([`DnsAppOpts`]) carries the full representation the API
//! requires on create and update; the read side ([`DnsApp`]) is the server's
//! snapshot of an existing app. Partial updates are expressed as a
//! [`DnsAppPatch`] merged onto an options value built from the current
//! snapshot, because the remote API has no true PATCH.

use serde::{Deserialize, Serialize};

/// Protocol tag fixed by the API for DNS applications.
pub const DNS_APP_PROTOCOL: &str = "dns";

/// Application type tag fixed by the API for DNS applications.
pub const DNS_APP_TYPE: &str = "V1_JS";

/// Options submitted when creating or updating a DNS application.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsAppOpts {
    /// Always `"dns"`.
    pub protocol: String,
    /// Always `"V1_JS"`.
    #[serde(rename = "type")]
    pub app_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_cname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    /// Percentage of sonar availability below which the fallback applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_threshold: Option<u32>,
    /// JavaScript source of the app, whitespace-trimmed on set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_data: Option<String>,
}

impl DnsAppOpts {
    /// Options populated with the fixed protocol and type tags.
    pub fn new() -> Self {
        Self {
            protocol: DNS_APP_PROTOCOL.to_string(),
            app_type: DNS_APP_TYPE.to_string(),
            name: None,
            description: None,
            fallback_cname: None,
            ttl: None,
            availability_threshold: None,
            app_data: None,
        }
    }

    /// Full options snapshot seeded from an existing app, used as the merge
    /// base for partial updates.
    pub fn from_app(app: &DnsApp) -> Self {
        let mut opts = Self::new()
            .with_name(&app.name)
            .with_description(&app.description)
            .with_fallback_cname(&app.fallback_cname)
            .with_ttl(app.ttl)
            .with_app_data(&app.app_data);
        if let Some(threshold) = app.availability_threshold {
            opts = opts.with_availability_threshold(threshold);
        }
        opts
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn with_fallback_cname(mut self, value: impl Into<String>) -> Self {
        self.fallback_cname = Some(value.into());
        self
    }

    pub fn with_ttl(mut self, value: u32) -> Self {
        self.ttl = Some(value);
        self
    }

    pub fn with_availability_threshold(mut self, value: u32) -> Self {
        self.availability_threshold = Some(value);
        self
    }

    /// Sets the JavaScript code of the app. Leading and trailing whitespace
    /// is stripped so equivalent inputs serialize identically.
    pub fn with_app_data(mut self, value: impl AsRef<str>) -> Self {
        self.app_data = Some(value.as_ref().trim().to_string());
        self
    }

    /// Merge a patch onto this snapshot, yielding the full representation to
    /// PUT. Fields absent from the patch keep their current values.
    pub fn apply(self, patch: DnsAppPatch) -> Self {
        let mut result = self;
        if let Some(name) = patch.name {
            result = result.with_name(name);
        }
        if let Some(description) = patch.description {
            result = result.with_description(description);
        }
        if let Some(cname) = patch.fallback_cname {
            result = result.with_fallback_cname(cname);
        }
        if let Some(ttl) = patch.ttl {
            result = result.with_ttl(ttl);
        }
        if let Some(threshold) = patch.availability_threshold {
            result = result.with_availability_threshold(threshold);
        }
        if let Some(app_data) = patch.app_data {
            result = result.with_app_data(app_data);
        }
        result
    }
}

impl Default for DnsAppOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-field (or few-field) change applied on top of a current snapshot.
#[derive(Debug, Clone, Default)]
pub struct DnsAppPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub fallback_cname: Option<String>,
    pub ttl: Option<u32>,
    pub availability_threshold: Option<u32>,
    pub app_data: Option<String>,
}

/// An existing DNS application as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DnsApp {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub fallback_cname: String,
    pub ttl: u32,
    pub availability_threshold: Option<u32>,
    pub app_data: String,
    /// CNAME the platform assigns to the app.
    #[serde(rename = "cname")]
    pub app_cname: String,
    pub version: u32,
}
