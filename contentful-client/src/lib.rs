//! Async client for the Contentful content management API.
//!
//! [`Client`] owns the HTTP transport. Resource operations hang off
//! per-space handles:
//!
//! ```no_run
//! # async fn run() -> contentful_client::ClientResult<()> {
//! use contentful_client::{Client, ClientConfig};
//!
//! let client = Client::new(ClientConfig::new("CFPAT-token"))?;
//! let mut entry = client.entries("space1").get("entry1", None).await?;
//! entry.set_field("title", serde_json::json!({"en-US": "Hello"}));
//! client.entries("space1").upsert(&mut entry).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Writes follow the version-stamped protocol in [`mutation`]: the current
//! version travels in `X-Contentful-Version`, and a stale version comes back
//! as a 409 (see [`ClientError::is_version_conflict`]). Nothing retries.

mod client;
mod collection;
mod config;
mod content_types;
mod entries;
mod error;
pub mod mutation;
mod path;
mod request;
mod resolver;
mod sync;

pub use client::{Client, MANAGEMENT_MEDIA_TYPE};
pub use collection::{Collection, Query};
pub use config::{ClientConfig, DEFAULT_BASE_URL, MAX_PAGE_LIMIT};
pub use content_types::ContentTypes;
pub use entries::Entries;
pub use error::{ClientError, ClientResult};
pub use path::Scope;
pub use request::PreparedRequest;
pub use resolver::{ContentTypeSource, FieldResolver};
pub use sync::{SyncSession, token_from_url};
