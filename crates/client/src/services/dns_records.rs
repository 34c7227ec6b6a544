//! DNS record service.
//!
//! Records have no list endpoint; enumeration goes through the owning zone's
//! `records` array.

use itm_domain::types::{DnsRecord, DnsRecordOpts};
use itm_domain::Result;
use tracing::warn;

use super::{decode, encode, expect_status};
use crate::http::HttpTransport;

const DNS_RECORDS_BASE_PATH: &str = "v2/config/authdns.json/record";

/// CRUD operations for DNS records.
pub struct DnsRecordsService<'a> {
    transport: &'a HttpTransport,
}

impl<'a> DnsRecordsService<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Create a DNS record. This endpoint answers 200, not 201.
    pub async fn create(&self, opts: &DnsRecordOpts) -> Result<DnsRecord> {
        let body = encode(opts)?;
        let response =
            self.transport.post(DNS_RECORDS_BASE_PATH, body, None).await.map_err(|err| {
                warn!(error = %err, "DNS record create request failed");
                err
            })?;
        expect_status(&response, 200)?;
        decode(&response)
    }

    /// Replace a DNS record with the full representation in `opts`.
    pub async fn update(&self, id: u32, opts: &DnsRecordOpts) -> Result<DnsRecord> {
        let body = encode(opts)?;
        let response =
            self.transport.put(&record_path(id), body, None).await.map_err(|err| {
                warn!(error = %err, "DNS record update request failed");
                err
            })?;
        expect_status(&response, 200)?;
        decode(&response)
    }

    /// Fetch a DNS record by id.
    pub async fn get(&self, id: u32) -> Result<DnsRecord> {
        let response = self.transport.get(&record_path(id)).await?;
        expect_status(&response, 200)?;
        decode(&response)
    }

    /// Delete a DNS record by id.
    pub async fn delete(&self, id: u32) -> Result<()> {
        let response = self.transport.delete(&record_path(id)).await?;
        expect_status(&response, 204)
    }
}

fn record_path(id: u32) -> String {
    format!("{DNS_RECORDS_BASE_PATH}/{id}")
}
