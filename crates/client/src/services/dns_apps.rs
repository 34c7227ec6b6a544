//! DNS application service.

use itm_domain::types::{DnsApp, DnsAppOpts, DnsAppPatch};
use itm_domain::Result;
use tracing::{debug, warn};

use super::{decode, encode, expect_status};
use crate::http::HttpTransport;

const DNS_APPS_BASE_PATH: &str = "v2/config/applications/dns.json";

/// Predicate applied to list results; a record survives iff every supplied
/// predicate returns true.
pub type DnsAppFilter = Box<dyn Fn(&DnsApp) -> bool + Send + Sync>;

/// CRUD operations for DNS applications.
pub struct DnsAppsService<'a> {
    transport: &'a HttpTransport,
}

impl<'a> DnsAppsService<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Create a DNS application. `publish` controls whether the app goes
    /// live immediately or stays staged.
    pub async fn create(&self, opts: &DnsAppOpts, publish: bool) -> Result<DnsApp> {
        let body = encode(opts)?;
        let response = self
            .transport
            .post(DNS_APPS_BASE_PATH, body, Some(&[("publish", publish_value(publish))]))
            .await
            .map_err(|err| {
                warn!(error = %err, "DNS app create request failed");
                err
            })?;
        expect_status(&response, 201)?;
        decode(&response)
    }

    /// Replace a DNS application with the full representation in `opts`.
    pub async fn update(&self, id: u32, opts: &DnsAppOpts, publish: bool) -> Result<DnsApp> {
        let body = encode(opts)?;
        let response = self
            .transport
            .put(&app_path(id), body, Some(&[("publish", publish_value(publish))]))
            .await
            .map_err(|err| {
                warn!(error = %err, "DNS app update request failed");
                err
            })?;
        expect_status(&response, 200)?;
        decode(&response)
    }

    /// Fetch a DNS application by id.
    pub async fn get(&self, id: u32) -> Result<DnsApp> {
        let response = self.transport.get(&app_path(id)).await?;
        expect_status(&response, 200)?;
        decode(&response)
    }

    /// Delete a DNS application by id.
    pub async fn delete(&self, id: u32) -> Result<()> {
        let response = self.transport.delete(&app_path(id)).await?;
        expect_status(&response, 204)
    }

    /// List DNS applications, keeping records that pass every filter.
    /// Server-returned order is preserved.
    pub async fn list(&self, filters: &[DnsAppFilter]) -> Result<Vec<DnsApp>> {
        let response = self.transport.get(DNS_APPS_BASE_PATH).await?;
        expect_status(&response, 200)?;
        let all: Vec<DnsApp> = decode(&response)?;
        Ok(all.into_iter().filter(|app| filters.iter().all(|f| f(app))).collect())
    }

    /// Apply a partial update. The remote API requires the full
    /// representation on write, so this fetches the current app, merges the
    /// patch onto a snapshot of it, and PUTs the result with `publish=true`.
    pub async fn update_with(&self, id: u32, patch: DnsAppPatch) -> Result<DnsApp> {
        let current = self.get(id).await?;
        let opts = DnsAppOpts::from_app(&current).apply(patch);
        debug!(id, "merged DNS app update baseline");
        self.update(id, &opts, true).await
    }

    /// Rename a DNS application.
    pub async fn update_name(&self, id: u32, name: impl Into<String>) -> Result<DnsApp> {
        self.update_with(
            id,
            DnsAppPatch {
                name: Some(name.into()),
                ..DnsAppPatch::default()
            },
        )
        .await
    }

    /// Change the description of a DNS application.
    pub async fn update_description(
        &self,
        id: u32,
        description: impl Into<String>,
    ) -> Result<DnsApp> {
        self.update_with(
            id,
            DnsAppPatch {
                description: Some(description.into()),
                ..DnsAppPatch::default()
            },
        )
        .await
    }

    /// Replace the JavaScript code of a DNS application.
    pub async fn update_app_data(&self, id: u32, app_data: impl Into<String>) -> Result<DnsApp> {
        self.update_with(
            id,
            DnsAppPatch {
                app_data: Some(app_data.into()),
                ..DnsAppPatch::default()
            },
        )
        .await
    }

    /// Change the fallback CNAME of a DNS application.
    pub async fn update_fallback_cname(
        &self,
        id: u32,
        fallback_cname: impl Into<String>,
    ) -> Result<DnsApp> {
        self.update_with(
            id,
            DnsAppPatch {
                fallback_cname: Some(fallback_cname.into()),
                ..DnsAppPatch::default()
            },
        )
        .await
    }

    /// Change the default TTL of a DNS application.
    pub async fn update_ttl(&self, id: u32, ttl: u32) -> Result<DnsApp> {
        self.update_with(
            id,
            DnsAppPatch {
                ttl: Some(ttl),
                ..DnsAppPatch::default()
            },
        )
        .await
    }
}

fn app_path(id: u32) -> String {
    format!("{DNS_APPS_BASE_PATH}/{id}")
}

fn publish_value(publish: bool) -> &'static str {
    if publish {
        "true"
    } else {
        "false"
    }
}
