//! Field resolution: pairs an entry's value with its declared field kind.

use crate::client::Client;
use crate::collection::Query;
use crate::error::{ClientError, ClientResult};
use crate::request::PreparedRequest;
use async_trait::async_trait;
use contentful_model::{ContentType, Entry, EntryField, Page, Versioned};
use tracing::debug;

/// Where the resolver looks up content types.
#[async_trait]
pub trait ContentTypeSource: Send + Sync {
    /// One page of the content types in `space_id`, starting at `skip`.
    async fn content_type_page(&self, space_id: &str, skip: u64) -> ClientResult<Page<ContentType>>;
}

#[async_trait]
impl ContentTypeSource for Client {
    async fn content_type_page(&self, space_id: &str, skip: u64) -> ClientResult<Page<ContentType>> {
        let query = Query::new().skip(skip).limit(self.config().page_limit);
        let request =
            PreparedRequest::get(self.scope(space_id).content_types()).with_queries(query.pairs());
        self.fetch_into(request).await
    }
}

#[async_trait]
impl<S: ContentTypeSource + ?Sized> ContentTypeSource for &S {
    async fn content_type_page(&self, space_id: &str, skip: u64) -> ClientResult<Page<ContentType>> {
        (**self).content_type_page(space_id, skip).await
    }
}

/// Resolves entry fields to [`EntryField`]s.
///
/// Nothing is cached: every call fetches content type pages afresh, stopping
/// at the page that contains the entry's content type.
pub struct FieldResolver<S> {
    source: S,
}

impl<S: ContentTypeSource> FieldResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Value of `field_id` on `entry` with the kind declared by the entry's
    /// content type.
    ///
    /// Fails with [`ClientError::Precondition`] when the entry lacks a space
    /// or content type reference, and with [`ClientError::NotFound`] when the
    /// content type or the field does not exist.
    pub async fn resolve(&self, entry: &Entry, field_id: &str) -> ClientResult<EntryField> {
        let space_id = entry.space_id().ok_or_else(|| {
            ClientError::Precondition("entry has no space reference".to_string())
        })?;
        let content_type_id = entry.content_type_id().ok_or_else(|| {
            ClientError::Precondition("entry has no content type reference".to_string())
        })?;

        let content_type = self.find_content_type(space_id, content_type_id).await?;
        entry.typed_field(&content_type, field_id).ok_or_else(|| {
            ClientError::NotFound(format!(
                "field `{field_id}` on content type `{content_type_id}`"
            ))
        })
    }

    async fn find_content_type(&self, space_id: &str, id: &str) -> ClientResult<ContentType> {
        let mut skip = 0;
        loop {
            let page = self.source.content_type_page(space_id, skip).await?;
            let next = page.next_offset(skip);

            if let Some(found) = page.items.into_iter().find(|ct| ct.id() == Some(id)) {
                debug!("resolved content type {} at skip {}", id, skip);
                return Ok(found);
            }
            let Some(next) = next else {
                return Err(ClientError::NotFound(format!(
                    "content type `{id}` in space `{space_id}`"
                )));
            };
            skip = next;
        }
    }
}
