//! OAuth token payload.

use serde::Deserialize;

/// Bearer token returned by the client-credentials exchange.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Token {
    /// The bearer token value to place in `Authorization` headers.
    pub value: String,
    pub token_type: String,
    pub expired: bool,
}
