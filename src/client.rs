use reqwest::blocking::Client; // calls are synchronous, one round trip each
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

use crate::configs::{ClientConfig, WitConfig};
use crate::errors::{WitError, WitResult};
use crate::utils::{encode, with_version};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Handle to the Wit API. Holds the immutable configuration and a pooled HTTP client, and is
/// safe to share between threads.
#[derive(Debug, Clone)]
pub struct WitClient {
    client: Client,
    config: WitConfig,
}

impl WitClient {
    pub fn new(config: WitConfig) -> WitResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    /// Build a client from `WIT_ACCESS_TOKEN` and the optional `WIT_API_HOST`.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = WitConfig::from_env()?;
        Ok(Self::new(config)?)
    }

    pub fn config(&self) -> &WitConfig {
        &self.config
    }

    /// Issue a single request and return the raw body of a 200 response.
    ///
    /// `resource` is the path (and optional query) below the configured host. The version
    /// marker is appended here. Any other status is turned into [`WitError::Remote`] carrying
    /// the reason phrase; its body is read and dropped.
    pub fn execute(
        &self,
        method: Method,
        resource: &str,
        content_type: Option<&str>,
        body: Vec<u8>,
    ) -> WitResult<Vec<u8>> {
        let url = format!(
            "{}{}",
            self.config.host.trim_end_matches('/'),
            with_version(resource)
        );
        debug!(method = %method, resource = %resource, body_len = body.len(), "Sending Wit request");

        let mut request = self
            .client
            .request(method, &url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.config.access_token),
            )
            .header(ACCEPT, JSON_CONTENT_TYPE);

        if !body.is_empty() {
            if let Some(content_type) = content_type.filter(|ct| !ct.is_empty()) {
                request = request.header(CONTENT_TYPE, content_type);
            }
            request = request.body(body);
        }

        let response = request.send()?;
        let status = response.status();
        let data = response.bytes()?;
        debug!(status = %status, body_len = data.len(), "Received Wit response");

        match status {
            StatusCode::OK => Ok(data.to_vec()),
            status => {
                warn!(status = %status, resource = %resource, "Wit request failed");
                Err(WitError::remote(status))
            }
        }
    }

    pub(crate) fn get(&self, resource: &str) -> WitResult<Vec<u8>> {
        self.execute(Method::GET, resource, None, Vec::new())
    }

    pub(crate) fn delete(&self, resource: &str) -> WitResult<Vec<u8>> {
        self.execute(Method::DELETE, resource, None, Vec::new())
    }

    pub(crate) fn post_json<T: Serialize>(&self, resource: &str, payload: &T) -> WitResult<Vec<u8>> {
        let body = encode(payload)?;
        self.execute(Method::POST, resource, Some(JSON_CONTENT_TYPE), body)
    }

    pub(crate) fn put_json<T: Serialize>(&self, resource: &str, payload: &T) -> WitResult<Vec<u8>> {
        let body = encode(payload)?;
        self.execute(Method::PUT, resource, Some(JSON_CONTENT_TYPE), body)
    }

    pub(crate) fn post_bytes(
        &self,
        resource: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> WitResult<Vec<u8>> {
        self.execute(Method::POST, resource, Some(content_type), body)
    }
}
