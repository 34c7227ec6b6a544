//! OAuth client-credentials token helper.
//!
//! Standalone: the [`crate::ItmClient`] never attaches tokens to its
//! requests. Callers fetch a bearer token here and wire it into their own
//! transport configuration (e.g. a default `Authorization` header on an
//! injected HTTP client).

use async_trait::async_trait;
use itm_domain::constants::DEFAULT_TOKEN_URL;
use itm_domain::types::Token;
use itm_domain::{ItmError, Result};
use tracing::debug;

/// OAuth client id/secret pair for the client-credentials grant.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

/// Provides bearer tokens to authorize API calls.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Retrieve a bearer token value.
    async fn access_token(&self) -> Result<String>;
}

/// Exchange client credentials for a token at the production endpoint.
pub async fn fetch_token(credentials: &Credentials) -> Result<Token> {
    fetch_token_from(DEFAULT_TOKEN_URL, credentials).await
}

/// Exchange client credentials for a token at `token_url`.
///
/// POSTs the form-encoded grant, expects 200, and decodes the token body.
/// Malformed bodies surface as a decode error rather than an empty token.
pub async fn fetch_token_from(token_url: &str, credentials: &Credentials) -> Result<Token> {
    let params = [
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("grant_type", "client_credentials"),
    ];

    let client = reqwest::Client::new();
    let response = client
        .post(token_url)
        .form(&params)
        .send()
        .await
        .map_err(|err| ItmError::Network(err.to_string()))?;

    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(|err| ItmError::Network(err.to_string()))?;
    debug!(status, "received token endpoint response");

    if status != 200 {
        return Err(ItmError::UnexpectedStatus {
            expected: 200,
            got: status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    serde_json::from_slice(&body).map_err(|err| ItmError::Decode(err.to_string()))
}

/// [`TokenProvider`] backed by the client-credentials grant. Fetches a fresh
/// token on every call; callers needing reuse cache the value themselves.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    token_url: String,
    credentials: Credentials,
}

impl ClientCredentials {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            credentials,
        }
    }

    /// Override the token endpoint, primarily for testing.
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }
}

#[async_trait]
impl TokenProvider for ClientCredentials {
    async fn access_token(&self) -> Result<String> {
        let token = fetch_token_from(&self.token_url, &self.credentials).await?;
        Ok(token.value)
    }
}
