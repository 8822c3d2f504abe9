//! Entry endpoints.

use crate::client::Client;
use crate::collection::Collection;
use crate::error::ClientResult;
use crate::mutation;
use crate::path::Scope;
use crate::request::PreparedRequest;
use crate::resolver::FieldResolver;
use crate::sync::SyncSession;
use contentful_model::{Entry, EntryField, Versioned};
use serde_json::Value;
use tracing::info;

/// Entry operations within one space.
pub struct Entries<'a> {
    client: &'a Client,
    scope: Scope,
}

impl<'a> Entries<'a> {
    pub(crate) fn new(client: &'a Client, scope: Scope) -> Self {
        Self { client, scope }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn list(&self) -> Collection<'a, Entry> {
        Collection::new(self.client, PreparedRequest::get(self.scope.entries()))
    }

    /// Fetches one entry. With a `locale`, the server returns flat field
    /// values for that locale and the entry remembers it.
    pub async fn get(&self, id: &str, locale: Option<&str>) -> ClientResult<Entry> {
        let mut request = PreparedRequest::get(self.scope.entry(id));
        if let Some(locale) = locale {
            request = request.with_query("locale", locale);
        }
        let value = self.client.fetch(request).await?;
        let entry = Entry::decode(&value)?;
        Ok(match locale {
            Some(locale) => entry.with_locale(locale),
            None => entry,
        })
    }

    /// Creates or replaces `entry`, then refreshes it from the response.
    ///
    /// An entry without a content type reference fails before anything is
    /// sent.
    pub async fn upsert(&self, entry: &mut Entry) -> ClientResult<()> {
        let request = mutation::upsert_entry(&self.scope, entry)?;
        let response = self.client.execute(request).await?;
        refresh(entry, response)?;
        info!(
            "Saved entry {} at version {}",
            entry.id().unwrap_or_default(),
            entry.version()
        );
        Ok(())
    }

    pub async fn delete(&self, entry: &Entry) -> ClientResult<()> {
        self.client
            .execute(mutation::delete_entry(&self.scope, entry))
            .await?;
        info!("Deleted entry {}", entry.id().unwrap_or_default());
        Ok(())
    }

    pub async fn publish(&self, entry: &mut Entry) -> ClientResult<()> {
        let response = self
            .client
            .execute(mutation::publish_entry(&self.scope, entry))
            .await?;
        refresh(entry, response)?;
        info!("Published entry {}", entry.id().unwrap_or_default());
        Ok(())
    }

    pub async fn unpublish(&self, entry: &mut Entry) -> ClientResult<()> {
        let response = self
            .client
            .execute(mutation::unpublish_entry(&self.scope, entry))
            .await?;
        refresh(entry, response)?;
        info!("Unpublished entry {}", entry.id().unwrap_or_default());
        Ok(())
    }

    /// Resolves `field_id` on `entry` against its content type, looked up in
    /// the entry's own space.
    pub async fn field(&self, entry: &Entry, field_id: &str) -> ClientResult<EntryField> {
        FieldResolver::new(self.client).resolve(entry, field_id).await
    }

    /// Starts a new sync run.
    pub fn sync(&self) -> SyncSession<'a> {
        SyncSession::initial(self.client, self.scope.clone())
    }

    /// Resumes syncing from a token saved at the end of an earlier run.
    pub fn sync_from(&self, token: impl Into<String>) -> SyncSession<'a> {
        SyncSession::from_token(self.client, self.scope.clone(), token)
    }
}

/// Replaces `entry` with the server's copy, keeping the requested locale.
fn refresh(entry: &mut Entry, response: Option<Value>) -> ClientResult<()> {
    if let Some(value) = response {
        let mut updated = Entry::decode(&value)?;
        updated.locale = entry.locale.take();
        *entry = updated;
    }
    Ok(())
}
