use super::base::ClientConfig;
use anyhow::Result;
use std::time::Duration;

pub const WIT_HOST: &str = "https://api.wit.ai";

/// Connection settings shared by every call made through one client.
#[derive(Debug, Clone)]
pub struct WitConfig {
    pub access_token: String,
    pub host: String,
    /// Overall deadline per request. `None` means the call waits as long as the server does.
    pub timeout: Option<Duration>,
}

impl WitConfig {
    pub fn new<S: Into<String>>(access_token: S) -> Self {
        Self {
            access_token: access_token.into(),
            host: WIT_HOST.to_string(),
            timeout: None,
        }
    }

    pub fn with_host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl ClientConfig for WitConfig {
    fn from_env() -> Result<Self> {
        let access_token = Self::get_env("WIT_ACCESS_TOKEN", true, None)?
            .ok_or_else(|| anyhow::anyhow!("Wit access token should be present"))?;

        let host = Self::get_env("WIT_API_HOST", false, Some(WIT_HOST.to_string()))?
            .unwrap_or_else(|| WIT_HOST.to_string());

        Ok(Self::new(access_token).with_host(host))
    }
}
