//! Version-stamped mutation protocol.
//!
//! Every write carries the resource's current version in
//! `X-Contentful-Version`; the server rejects stale versions with 409.
//! Whether a write creates or replaces is decided by identity alone: a
//! resource with a non-empty id is replaced with `PUT .../{id}`, one
//! without is created with `POST` on the collection path.
//!
//! The functions here only build [`PreparedRequest`]s. Nothing is sent.

use crate::error::{ClientError, ClientResult};
use crate::path::Scope;
use crate::request::PreparedRequest;
use contentful_model::{ContentType, Entry, Versioned};
use reqwest::Method;
use serde_json::json;

/// Optimistic concurrency header.
pub const VERSION_HEADER: &str = "X-Contentful-Version";

/// Content type id an entry write is validated against.
pub const CONTENT_TYPE_HEADER: &str = "X-Contentful-Content-Type";

/// Create or replace, derived from whether the resource has an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteIntent {
    Create,
    Replace,
}

impl WriteIntent {
    pub fn of<R: Versioned + ?Sized>(resource: &R) -> Self {
        if resource.id().is_some() {
            WriteIntent::Replace
        } else {
            WriteIntent::Create
        }
    }

    pub fn method(self) -> Method {
        match self {
            WriteIntent::Create => Method::POST,
            WriteIntent::Replace => Method::PUT,
        }
    }
}

/// Id used in item paths. Unpersisted resources yield an empty segment and
/// the server answers for it.
fn path_id<R: Versioned + ?Sized>(resource: &R) -> &str {
    resource.id().unwrap_or_default()
}

fn stamped(request: PreparedRequest, resource: &impl Versioned) -> PreparedRequest {
    request.with_header(VERSION_HEADER, resource.version())
}

// ── Content types ────────────────────────────────────────────────

/// `POST .../content_types` or `PUT .../content_types/{id}` with the full
/// content type as body.
pub fn upsert_content_type(scope: &Scope, content_type: &ContentType) -> ClientResult<PreparedRequest> {
    let intent = WriteIntent::of(content_type);
    let path = match intent {
        WriteIntent::Replace => scope.content_type(path_id(content_type)),
        WriteIntent::Create => scope.content_types(),
    };
    let request = PreparedRequest::new(intent.method(), path);
    let body = serde_json::to_value(content_type)?;
    Ok(stamped(request, content_type).with_body(body))
}

pub fn delete_content_type(scope: &Scope, content_type: &ContentType) -> PreparedRequest {
    stamped(
        PreparedRequest::delete(scope.content_type(path_id(content_type))),
        content_type,
    )
}

pub fn activate_content_type(scope: &Scope, content_type: &ContentType) -> PreparedRequest {
    stamped(
        PreparedRequest::put(scope.content_type_published(path_id(content_type))),
        content_type,
    )
}

pub fn deactivate_content_type(scope: &Scope, content_type: &ContentType) -> PreparedRequest {
    stamped(
        PreparedRequest::delete(scope.content_type_published(path_id(content_type))),
        content_type,
    )
}

// ── Entries ──────────────────────────────────────────────────────

/// `POST .../entries` or `PUT .../entries/{id}` with `{"fields": ...}` as body.
///
/// Fails with [`ClientError::Precondition`] before building anything when
/// the entry does not reference a content type.
pub fn upsert_entry(scope: &Scope, entry: &Entry) -> ClientResult<PreparedRequest> {
    let content_type_id = entry
        .content_type_id()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            ClientError::Precondition(
                "creating or updating an entry requires a content type".to_string(),
            )
        })?;

    let intent = WriteIntent::of(entry);
    let path = match intent {
        WriteIntent::Replace => scope.entry(path_id(entry)),
        WriteIntent::Create => scope.entries(),
    };
    let request = PreparedRequest::new(intent.method(), path);
    Ok(stamped(request, entry)
        .with_header(CONTENT_TYPE_HEADER, content_type_id)
        .with_body(json!({ "fields": entry.fields })))
}

pub fn delete_entry(scope: &Scope, entry: &Entry) -> PreparedRequest {
    stamped(PreparedRequest::delete(scope.entry(path_id(entry))), entry)
}

pub fn publish_entry(scope: &Scope, entry: &Entry) -> PreparedRequest {
    stamped(PreparedRequest::put(scope.entry_published(path_id(entry))), entry)
}

pub fn unpublish_entry(scope: &Scope, entry: &Entry) -> PreparedRequest {
    stamped(PreparedRequest::delete(scope.entry_published(path_id(entry))), entry)
}
