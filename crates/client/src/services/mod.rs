//! Typed CRUD facades over the API resource families.
//!
//! Every service borrows the transport from the client and interprets status
//! codes for its operations: the documented contract status yields a decoded
//! record, anything else becomes [`ItmError::UnexpectedStatus`] carrying the
//! raw body. Transport errors pass through unchanged.

pub mod dns_apps;
pub mod dns_records;
pub mod dns_zones;
pub mod platforms;

pub use dns_apps::{DnsAppFilter, DnsAppsService};
pub use dns_records::DnsRecordsService;
pub use dns_zones::{DnsZoneFilter, DnsZonesService};
pub use platforms::{PlatformFilter, PlatformsService};

use itm_domain::{ItmError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::http::ApiResponse;

/// Serialize a request body, surfacing failures as [`ItmError::Encode`].
pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|err| ItmError::Encode(err.to_string()))
}

/// Decode a response body, surfacing failures as [`ItmError::Decode`].
pub(crate) fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T> {
    serde_json::from_slice(&response.body).map_err(|err| ItmError::Decode(err.to_string()))
}

/// Check the response against the operation's contract status. On mismatch
/// the body is carried in the error and never decoded as a record.
pub(crate) fn expect_status(response: &ApiResponse, expected: u16) -> Result<()> {
    if response.status != expected {
        return Err(ItmError::UnexpectedStatus {
            expected,
            got: response.status,
            body: response.body_string(),
        });
    }
    Ok(())
}
