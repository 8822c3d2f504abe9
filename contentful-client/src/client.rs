//! HTTP transport for the management API.

use crate::config::ClientConfig;
use crate::content_types::ContentTypes;
use crate::entries::Entries;
use crate::error::{ClientError, ClientResult};
use crate::path::Scope;
use crate::request::PreparedRequest;
use contentful_model::DecodeError;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Media type of management API request and response bodies.
pub const MANAGEMENT_MEDIA_TYPE: &str = "application/vnd.contentful.management.v1+json";

/// Management API client.
///
/// Cheap to share by reference; each operation issues its own request and
/// holds no state between calls.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client after validating `config`.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Path scope for `space_id` in the configured environment.
    pub fn scope(&self, space_id: &str) -> Scope {
        Scope::new(space_id, self.config.environment.clone())
    }

    pub fn content_types(&self, space_id: &str) -> ContentTypes<'_> {
        ContentTypes::new(self, self.scope(space_id))
    }

    pub fn entries(&self, space_id: &str) -> Entries<'_> {
        Entries::new(self, self.scope(space_id))
    }

    /// Sends `request` and returns the parsed response body, or `None` when
    /// the server answered with an empty body.
    ///
    /// Non-success statuses become [`ClientError::Api`] carrying the raw body.
    pub async fn execute(&self, request: PreparedRequest) -> ClientResult<Option<Value>> {
        let url = format!("{}{}", self.config.base(), request.path);
        debug!("{} {}", request.method, request.path);

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .bearer_auth(&self.config.access_token)
            .header(ACCEPT, MANAGEMENT_MEDIA_TYPE)
            .header(CONTENT_TYPE, MANAGEMENT_MEDIA_TYPE);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            warn!(
                "{} {} failed with {}: {}",
                request.method, request.path, status, body
            );
            return Err(ClientError::Api { status, body });
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let value = serde_json::from_slice(&bytes).map_err(DecodeError::from)?;
        Ok(Some(value))
    }

    /// Like [`execute`](Self::execute) but requires a body.
    pub(crate) async fn fetch(&self, request: PreparedRequest) -> ClientResult<Value> {
        let path = request.path.clone();
        self.execute(request)
            .await?
            .ok_or_else(|| ClientError::Protocol(format!("empty response body from {path}")))
    }

    /// Fetches and decodes a serde-shaped response such as a page envelope.
    pub(crate) async fn fetch_into<T: DeserializeOwned>(
        &self,
        request: PreparedRequest,
    ) -> ClientResult<T> {
        let value = self.fetch(request).await?;
        Ok(serde_json::from_value(value).map_err(DecodeError::from)?)
    }
}
