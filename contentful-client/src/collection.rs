//! Paginated collection endpoints.

use crate::client::Client;
use crate::error::ClientResult;
use crate::request::PreparedRequest;
use contentful_model::Page;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;

/// Query parameters for collection and sync endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    limit: Option<u64>,
    skip: Option<u64>,
    order: Option<String>,
    select: Vec<String>,
    content_type: Option<String>,
    locale: Option<String>,
    initial: bool,
    sync_token: Option<String>,
    filters: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Sort order, e.g. `sys.createdAt` or `-fields.title`.
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Adds a field path to the `select` projection.
    pub fn select(mut self, field: impl Into<String>) -> Self {
        self.select.push(field.into());
        self
    }

    pub fn content_type(mut self, content_type_id: impl Into<String>) -> Self {
        self.content_type = Some(content_type_id.into());
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Marks a sync request as the start of a new sync run.
    pub fn initial(mut self) -> Self {
        self.initial = true;
        self
    }

    pub fn sync_token(mut self, token: impl Into<String>) -> Self {
        self.sync_token = Some(token.into());
        self
    }

    /// Arbitrary search parameter, e.g. `("fields.slug", "hello")`.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Query string pairs in a stable order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if self.initial {
            pairs.push(("initial".to_string(), "true".to_string()));
        }
        if let Some(token) = &self.sync_token {
            pairs.push(("sync_token".to_string(), token.clone()));
        }
        if let Some(id) = &self.content_type {
            pairs.push(("content_type".to_string(), id.clone()));
        }
        if let Some(locale) = &self.locale {
            pairs.push(("locale".to_string(), locale.clone()));
        }
        if let Some(order) = &self.order {
            pairs.push(("order".to_string(), order.clone()));
        }
        if !self.select.is_empty() {
            pairs.push(("select".to_string(), self.select.join(",")));
        }
        pairs.extend(self.filters.iter().cloned());
        if let Some(skip) = self.skip {
            pairs.push(("skip".to_string(), skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

/// Lazily fetched collection, one page per [`next_page`](Self::next_page).
pub struct Collection<'a, T> {
    client: &'a Client,
    request: PreparedRequest,
    query: Query,
    next_skip: Option<u64>,
    _item: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> Collection<'a, T> {
    pub(crate) fn new(client: &'a Client, request: PreparedRequest) -> Self {
        let query = Query::new().limit(client.config().page_limit);
        Self {
            client,
            request,
            query,
            next_skip: Some(0),
            _item: PhantomData,
        }
    }

    /// Replaces the query. `skip` becomes the starting offset and a missing
    /// `limit` falls back to the configured page size.
    pub fn with_query(mut self, query: Query) -> Self {
        self.next_skip = Some(query.skip.unwrap_or(0));
        let limit = query.limit.unwrap_or(self.client.config().page_limit);
        self.query = query.limit(limit);
        self
    }

    /// Fetches the next page, or returns `None` once the collection is
    /// exhausted.
    pub async fn next_page(&mut self) -> ClientResult<Option<Page<T>>> {
        let Some(skip) = self.next_skip else {
            return Ok(None);
        };

        let request = self
            .request
            .clone()
            .with_queries(self.query.clone().skip(skip).pairs());
        let page: Page<T> = self.client.fetch_into(request).await?;
        debug!(
            "{}: {} items at skip {} of {}",
            self.request.path,
            page.items.len(),
            skip,
            page.total
        );

        self.next_skip = page.next_offset(skip);
        Ok(Some(page))
    }

    /// Drains the remaining pages into one vector.
    pub async fn collect_all(mut self) -> ClientResult<Vec<T>> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page.items);
        }
        Ok(items)
    }
}
