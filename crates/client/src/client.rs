//! Client configuration and resource-service accessors.

use std::time::Duration;

use itm_domain::Result;
use reqwest::Client as ReqwestClient;
use url::Url;

use crate::http::{HttpTransport, HttpTransportBuilder};
use crate::services::dns_apps::DnsAppsService;
use crate::services::dns_records::DnsRecordsService;
use crate::services::dns_zones::DnsZonesService;
use crate::services::platforms::PlatformsService;

/// Client for the ITM configuration API.
///
/// Holds only immutable configuration (base URL, user agent, transport);
/// cloning is cheap and a single client is safe to share across tasks.
/// Authentication is not handled here: callers obtain a bearer token via
/// [`crate::auth`] and attach it through their own transport configuration.
#[derive(Debug, Clone)]
pub struct ItmClient {
    transport: HttpTransport,
}

impl ItmClient {
    /// Client with production defaults.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start building a client with configuration overrides.
    pub fn builder() -> ItmClientBuilder {
        ItmClientBuilder::default()
    }

    /// Effective base URL, always ending with a path separator.
    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    /// User-agent string attached to every request.
    pub fn user_agent(&self) -> &str {
        self.transport.user_agent()
    }

    /// DNS application operations.
    pub fn dns_apps(&self) -> DnsAppsService<'_> {
        DnsAppsService::new(&self.transport)
    }

    /// DNS zone operations.
    pub fn dns_zones(&self) -> DnsZonesService<'_> {
        DnsZonesService::new(&self.transport)
    }

    /// DNS record operations.
    pub fn dns_records(&self) -> DnsRecordsService<'_> {
        DnsRecordsService::new(&self.transport)
    }

    /// Platform operations.
    pub fn platforms(&self) -> PlatformsService<'_> {
        PlatformsService::new(&self.transport)
    }
}

/// Builder for [`ItmClient`]. Options are applied in call order; the result
/// is read-only after `build`.
#[derive(Debug, Default)]
pub struct ItmClientBuilder {
    inner: HttpTransportBuilder,
}

impl ItmClientBuilder {
    /// Override the production base URL. A trailing path separator is added
    /// when missing.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    /// Override the default user-agent string. Empty values are ignored.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.inner = self.inner.user_agent(agent);
        self
    }

    /// Request timeout for the default underlying client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Replace the underlying HTTP client, primarily for testing.
    pub fn http_client(mut self, client: ReqwestClient) -> Self {
        self.inner = self.inner.client(client);
        self
    }

    pub fn build(self) -> Result<ItmClient> {
        Ok(ItmClient {
            transport: self.inner.build()?,
        })
    }
}
