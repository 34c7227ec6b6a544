//! Wire-contract data types, one module per API resource family.

pub mod auth;
pub mod dns_app;
pub mod dns_record;
pub mod dns_zone;
pub mod platform;

pub use auth::Token;
pub use dns_app::{DnsApp, DnsAppOpts, DnsAppPatch};
pub use dns_record::{DnsRecord, DnsRecordOpts};
pub use dns_zone::{DnsZone, DnsZoneOpts};
pub use platform::{Platform, PlatformCategory, PlatformOpts, RadarConfig};
