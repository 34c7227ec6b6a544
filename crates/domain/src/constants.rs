//! API constants
//!
//! Centralized location for the endpoint defaults and identification strings
//! used by the client.

/// Library name reported in the default user agent.
pub const LIBRARY_NAME: &str = "itm-client";

/// Library version reported in the default user agent.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Production configuration API, used when no base URL override is given.
pub const DEFAULT_BASE_URL: &str = "https://portal.cedexis.com/api/";

/// OAuth token endpoint for the client-credentials grant.
pub const DEFAULT_TOKEN_URL: &str = "https://api.cedexis.com/api/oauth/token";
