//! Content type endpoints.

use crate::client::Client;
use crate::collection::Collection;
use crate::error::ClientResult;
use crate::mutation;
use crate::path::Scope;
use crate::request::PreparedRequest;
use contentful_model::{ContentType, Versioned};
use serde_json::Value;
use tracing::info;

/// Content type operations within one space.
pub struct ContentTypes<'a> {
    client: &'a Client,
    scope: Scope,
}

impl<'a> ContentTypes<'a> {
    pub(crate) fn new(client: &'a Client, scope: Scope) -> Self {
        Self { client, scope }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn list(&self) -> Collection<'a, ContentType> {
        Collection::new(self.client, PreparedRequest::get(self.scope.content_types()))
    }

    pub async fn get(&self, id: &str) -> ClientResult<ContentType> {
        let value = self
            .client
            .fetch(PreparedRequest::get(self.scope.content_type(id)))
            .await?;
        Ok(ContentType::decode(&value)?)
    }

    /// Creates or replaces `content_type`, then refreshes it from the
    /// response so its id and version match the server.
    pub async fn upsert(&self, content_type: &mut ContentType) -> ClientResult<()> {
        let request = mutation::upsert_content_type(&self.scope, content_type)?;
        let response = self.client.execute(request).await?;
        refresh(content_type, response)?;
        info!(
            "Saved content type {} at version {}",
            content_type.id().unwrap_or_default(),
            content_type.version()
        );
        Ok(())
    }

    pub async fn delete(&self, content_type: &ContentType) -> ClientResult<()> {
        self.client
            .execute(mutation::delete_content_type(&self.scope, content_type))
            .await?;
        info!("Deleted content type {}", content_type.id().unwrap_or_default());
        Ok(())
    }

    pub async fn activate(&self, content_type: &mut ContentType) -> ClientResult<()> {
        let response = self
            .client
            .execute(mutation::activate_content_type(&self.scope, content_type))
            .await?;
        refresh(content_type, response)?;
        info!("Activated content type {}", content_type.id().unwrap_or_default());
        Ok(())
    }

    pub async fn deactivate(&self, content_type: &mut ContentType) -> ClientResult<()> {
        let response = self
            .client
            .execute(mutation::deactivate_content_type(&self.scope, content_type))
            .await?;
        refresh(content_type, response)?;
        info!("Deactivated content type {}", content_type.id().unwrap_or_default());
        Ok(())
    }
}

/// Replaces `content_type` with the server's copy when one was returned.
fn refresh(content_type: &mut ContentType, response: Option<Value>) -> ClientResult<()> {
    if let Some(value) = response {
        *content_type = ContentType::decode(&value)?;
    }
    Ok(())
}
