//! Client configuration.

use crate::error::{ClientError, ClientResult};
use serde::{Deserialize, Serialize};

/// Management API host.
pub const DEFAULT_BASE_URL: &str = "https://api.contentful.com";

/// Largest page the collection endpoints accept.
pub const MAX_PAGE_LIMIT: u64 = 1000;

/// Connection settings for [`Client`](crate::Client).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL for the management API (e.g. `https://api.contentful.com`).
    pub base_url: String,
    /// Content management token, sent as a bearer token.
    pub access_token: String,
    /// Environment id. When unset, requests address the space's master
    /// environment through the bare `/spaces/{id}` paths.
    pub environment: Option<String>,
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// Page size used by collections and the field resolver.
    pub page_limit: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: String::new(),
            environment: None,
            user_agent: concat!("contentful-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
            page_limit: 100,
        }
    }
}

impl ClientConfig {
    /// Default settings authenticated with `access_token`.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Checks the settings a client cannot work without.
    pub fn validate(&self) -> ClientResult<()> {
        if self.access_token.trim().is_empty() {
            return Err(ClientError::Config("access token is empty".to_string()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base url must be http(s): {}",
                self.base_url
            )));
        }
        if self.page_limit == 0 || self.page_limit > MAX_PAGE_LIMIT {
            return Err(ClientError::Config(format!(
                "page limit must be between 1 and {MAX_PAGE_LIMIT}, got {}",
                self.page_limit
            )));
        }
        if self.environment.as_deref().is_some_and(str::is_empty) {
            return Err(ClientError::Config("environment id is empty".to_string()));
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    pub(crate) fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
