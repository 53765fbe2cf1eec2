/*
[INPUT]:  HTTP configuration (base URL, timeouts) and optional credentials
[OUTPUT]: Configured reqwest client ready for public and signed calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::auth::{Credentials, NonceGenerator};
use crate::types::PrivateEndpoint;

use super::signature::{RequestSigner, SignedRequest};
use super::{IrError, Result};

/// Base URL for the Independent Reserve REST API
pub const API_BASE_URL: &str = "https://api.independentreserve.com";

const ERROR_BODY_LOG_MAX_BYTES: usize = 512;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("independent-reserve-adapter/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Point the client at another host (testing, staging)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

/// Main HTTP client for the Independent Reserve API.
///
/// Each instance owns its base URL and credentials; nothing is shared
/// between instances.
#[derive(Debug)]
pub struct IrClient {
    http_client: Client,
    base_url: String,
    credentials: Option<Credentials>,
    nonce: NonceGenerator,
}

impl IrClient {
    /// Create a public-only client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a public-only client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Create a client able to call private endpoints
    pub fn with_credentials(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        Self::build(config, Some(credentials))
    }

    fn build(config: ClientConfig, credentials: Option<Credentials>) -> Result<Self> {
        let parsed = Url::parse(&config.base_url).map_err(|e| {
            IrError::Configuration(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(IrError::Configuration(format!(
                "base URL must be http(s), got {:?}",
                config.base_url
            )));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
            nonce: NonceGenerator::new(),
        })
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path; this exact string is what gets signed
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Build the signed request for `request` without sending it
    pub fn signed_request<R: PrivateEndpoint + ?Sized>(
        &self,
        request: &R,
        nonce: u64,
    ) -> Result<SignedRequest> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            IrError::Configuration("credentials are required for private endpoints".to_string())
        })?;

        let url = self.endpoint_url(request.path());
        RequestSigner::new(credentials).sign_request(&url, nonce, request.fields())
    }

    /// GET a public endpoint (path plus verbatim query string)
    pub(crate) async fn get_public(&self, endpoint: &str) -> Result<Value> {
        let url = self.endpoint_url(endpoint);
        let builder = self.http_client.request(Method::GET, &url);
        self.send_json(endpoint, builder).await
    }

    /// Sign and POST a private endpoint with a fresh nonce
    pub(crate) async fn post_private<R: PrivateEndpoint>(&self, request: &R) -> Result<Value> {
        let nonce = self.nonce.next();
        let signed = self.signed_request(request, nonce)?;

        debug!(endpoint = request.path(), nonce, "signed private request");

        let builder = self
            .http_client
            .request(Method::POST, &signed.url)
            .json(&signed.payload);
        self.send_json(request.path(), builder).await
    }

    /// Send a request and decode the JSON body.
    ///
    /// Every REST call goes through here: failures are logged once at this
    /// boundary and returned to the caller as typed errors.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        builder: RequestBuilder,
    ) -> Result<T> {
        let request = builder.build().map_err(|err| {
            error!(endpoint, error = %err, "building request failed");
            IrError::Transport(err)
        })?;
        debug!(method = %request.method(), endpoint, "sending request");

        let response = self.http_client.execute(request).await.map_err(|err| {
            error!(endpoint, error = %err, "request transport failed");
            IrError::Transport(err)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            error!(endpoint, error = %err, "reading response body failed");
            IrError::Transport(err)
        })?;

        if !status.is_success() {
            error!(
                endpoint,
                status = status.as_u16(),
                body = %truncate_for_log(&body, ERROR_BODY_LOG_MAX_BYTES),
                "request rejected"
            );
            return Err(IrError::http_status(status, body));
        }

        serde_json::from_str(&body).map_err(|err| {
            error!(endpoint, error = %err, "response body is not valid JSON");
            IrError::Serialization(err)
        })
    }
}

pub(crate) fn truncate_for_log(value: &str, max_len: usize) -> String {
    if value.len() <= max_len {
        return value.to_string();
    }
    let mut end = max_len;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = String::with_capacity(end + 3);
    out.push_str(&value[..end]);
    out.push_str("...");
    out
}
