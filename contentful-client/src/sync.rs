//! Incremental sync.
//!
//! A sync run starts with `initial=true` (or a token saved from a previous
//! run) and follows `nextPageUrl` until the server answers with a
//! `nextSyncUrl`. The token in that URL starts the next run.

use crate::client::Client;
use crate::collection::Query;
use crate::error::{ClientError, ClientResult};
use crate::path::Scope;
use crate::request::PreparedRequest;
use contentful_model::{SyncItem, SyncPage};
use reqwest::Url;
use tracing::debug;

enum Cursor {
    Initial,
    Token(String),
}

/// One sync run over a space.
pub struct SyncSession<'a> {
    client: &'a Client,
    scope: Scope,
    cursor: Option<Cursor>,
    next_sync_token: Option<String>,
}

impl<'a> SyncSession<'a> {
    pub(crate) fn initial(client: &'a Client, scope: Scope) -> Self {
        Self {
            client,
            scope,
            cursor: Some(Cursor::Initial),
            next_sync_token: None,
        }
    }

    pub(crate) fn from_token(client: &'a Client, scope: Scope, token: impl Into<String>) -> Self {
        Self {
            client,
            scope,
            cursor: Some(Cursor::Token(token.into())),
            next_sync_token: None,
        }
    }

    /// Fetches the next page of this run, or `None` once the run finished.
    pub async fn next_page(&mut self) -> ClientResult<Option<SyncPage>> {
        let Some(cursor) = self.cursor.take() else {
            return Ok(None);
        };

        let query = match cursor {
            Cursor::Initial => Query::new().initial(),
            Cursor::Token(token) => Query::new().sync_token(token),
        };
        let request = PreparedRequest::get(self.scope.sync()).with_queries(query.pairs());
        let page: SyncPage = self.client.fetch_into(request).await?;
        debug!("sync page with {} items", page.items.len());

        match (&page.next_page_url, &page.next_sync_url) {
            (Some(url), _) => self.cursor = Some(Cursor::Token(token_from_url(url)?)),
            (None, Some(url)) => self.next_sync_token = Some(token_from_url(url)?),
            (None, None) => {
                return Err(ClientError::Protocol(
                    "sync page has neither nextPageUrl nor nextSyncUrl".to_string(),
                ));
            }
        }
        Ok(Some(page))
    }

    /// Token that resumes syncing after this run. Set once the last page
    /// has been fetched.
    pub fn next_sync_token(&self) -> Option<&str> {
        self.next_sync_token.as_deref()
    }

    /// Runs the session to completion, returning every item and the token
    /// for the next run.
    pub async fn collect_all(mut self) -> ClientResult<(Vec<SyncItem>, String)> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page.items);
        }
        let token = self
            .next_sync_token
            .ok_or_else(|| ClientError::Protocol("sync run ended without a token".to_string()))?;
        Ok((items, token))
    }
}

/// Extracts the `sync_token` query parameter from a sync URL.
pub fn token_from_url(url: &str) -> ClientResult<String> {
    let parsed = Url::parse(url)
        .map_err(|e| ClientError::Protocol(format!("malformed sync url {url}: {e}")))?;

    parsed
        .query_pairs()
        .find(|(key, _)| key == "sync_token")
        .map(|(_, token)| token.into_owned())
        .ok_or_else(|| ClientError::Protocol(format!("no sync_token in {url}")))
}
