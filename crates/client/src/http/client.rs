use std::time::Duration;

use itm_domain::constants::{DEFAULT_BASE_URL, LIBRARY_NAME, LIBRARY_VERSION};
use itm_domain::{ItmError, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use tracing::debug;
use url::Url;

const APPLICATION_JSON: &str = "application/json";

/// Normalized API response: status code plus raw body bytes.
///
/// The one value every operation decodes or inspects; status-code
/// interpretation is left entirely to the resource services.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Response body lossily decoded to text, for diagnostics.
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// HTTP transport wrapper issuing requests relative to a base URL.
///
/// Holds immutable configuration only; cloning is cheap and the transport is
/// safe to share across tasks. Each call performs exactly one round trip
/// with no retries.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: ReqwestClient,
    base_url: Url,
    user_agent: String,
}

impl HttpTransport {
    /// Start building a transport.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }

    /// Effective base URL, always ending with a path separator.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// User-agent string attached to every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// GET `path` relative to the base URL.
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        let url = self.resolve(path, None)?;
        debug!(method = %Method::GET, %url, "sending ITM API request");
        let request = self
            .client
            .get(url.clone())
            .header(ACCEPT, APPLICATION_JSON)
            .header(USER_AGENT, &self.user_agent);
        self.dispatch(Method::GET, url, request, true).await
    }

    /// POST a JSON body to `path`, with optional query parameters.
    pub async fn post(
        &self,
        path: &str,
        body: Vec<u8>,
        query: Option<&[(&str, &str)]>,
    ) -> Result<ApiResponse> {
        let url = self.resolve(path, query)?;
        debug!(method = %Method::POST, %url, body = %String::from_utf8_lossy(&body), "sending ITM API request");
        let request = self.write_request(self.client.post(url.clone()), body);
        self.dispatch(Method::POST, url, request, true).await
    }

    /// PUT a JSON body to `path`, with optional query parameters.
    pub async fn put(
        &self,
        path: &str,
        body: Vec<u8>,
        query: Option<&[(&str, &str)]>,
    ) -> Result<ApiResponse> {
        let url = self.resolve(path, query)?;
        debug!(method = %Method::PUT, %url, body = %String::from_utf8_lossy(&body), "sending ITM API request");
        let request = self.write_request(self.client.put(url.clone()), body);
        self.dispatch(Method::PUT, url, request, true).await
    }

    /// DELETE `path`. Any response body is discarded.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        let url = self.resolve(path, None)?;
        debug!(method = %Method::DELETE, %url, "sending ITM API request");
        let request = self.client.delete(url.clone()).header(USER_AGENT, &self.user_agent);
        self.dispatch(Method::DELETE, url, request, false).await
    }

    fn write_request(&self, request: RequestBuilder, body: Vec<u8>) -> RequestBuilder {
        request
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(USER_AGENT, &self.user_agent)
            .body(body)
    }

    /// Resolve `path` against the base URL. Relative resolution, not string
    /// concatenation, so escaping and query handling stay correct.
    fn resolve(&self, path: &str, query: Option<&[(&str, &str)]>) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|err| ItmError::Config(format!("invalid request path {path}: {err}")))?;
        if let Some(pairs) = query {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    async fn dispatch(
        &self,
        method: Method,
        url: Url,
        request: RequestBuilder,
        read_body: bool,
    ) -> Result<ApiResponse> {
        let response =
            request.send().await.map_err(|err| ItmError::Network(err.to_string()))?;
        let status = response.status().as_u16();
        let body = if read_body {
            response
                .bytes()
                .await
                .map_err(|err| ItmError::Network(err.to_string()))?
                .to_vec()
        } else {
            Vec::new()
        };
        debug!(%method, %url, status, body = %String::from_utf8_lossy(&body), "received ITM API response");
        Ok(ApiResponse { status, body })
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug, Default)]
pub struct HttpTransportBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    client: Option<ReqwestClient>,
}

impl HttpTransportBuilder {
    /// Override the production base URL. A trailing path separator is added
    /// when missing so relative resolution keeps the full path.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the default user-agent string. Empty values are ignored.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Request timeout for the default underlying client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the underlying HTTP client, primarily for testing. The
    /// timeout option is ignored when a client is supplied.
    pub fn client(mut self, client: ReqwestClient) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<HttpTransport> {
        let raw = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = normalize_base_url(&raw)?;

        let user_agent = match self.user_agent {
            Some(agent) if !agent.is_empty() => agent,
            _ => format!("{LIBRARY_NAME}/{LIBRARY_VERSION}"),
        };

        let client = match self.client {
            Some(client) => client,
            None => {
                let timeout = self.timeout.unwrap_or(Duration::from_secs(30));
                ReqwestClient::builder()
                    .timeout(timeout)
                    .build()
                    .map_err(|err| ItmError::Config(err.to_string()))?
            }
        };

        Ok(HttpTransport {
            client,
            base_url,
            user_agent,
        })
    }
}

/// Parse and normalize a base URL so it always ends with `/`.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url =
        Url::parse(raw).map_err(|err| ItmError::Config(format!("invalid base URL {raw}: {err}")))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
