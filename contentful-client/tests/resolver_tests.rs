use async_trait::async_trait;
use contentful_client::{ClientError, ClientResult, ContentTypeSource, FieldResolver};
use contentful_model::{ContentType, Entry, Field, FieldKind, Page, Sys};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Mutex;

/// In-memory content types served `page_size` at a time. Records every
/// (space, skip) it was asked for.
struct FakeSource {
    content_types: Vec<ContentType>,
    page_size: usize,
    calls: Mutex<Vec<(String, u64)>>,
}

impl FakeSource {
    fn new(content_types: Vec<ContentType>, page_size: usize) -> Self {
        Self {
            content_types,
            page_size,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, u64)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentTypeSource for FakeSource {
    async fn content_type_page(&self, space_id: &str, skip: u64) -> ClientResult<Page<ContentType>> {
        self.calls.lock().unwrap().push((space_id.to_string(), skip));
        let items: Vec<ContentType> = self
            .content_types
            .iter()
            .skip(skip as usize)
            .take(self.page_size)
            .cloned()
            .collect();
        Ok(Page {
            total: self.content_types.len() as u64,
            skip,
            limit: self.page_size as u64,
            items,
        })
    }
}

fn content_type(id: &str, fields: &[(&str, FieldKind)]) -> ContentType {
    let mut ct = ContentType {
        sys: Some(Sys::with_id(id, 1)),
        ..ContentType::new(id)
    };
    for (field_id, kind) in fields {
        ct = ct.with_field(Field::new(*field_id, *field_id, kind.clone()));
    }
    ct
}

fn blog_entry() -> Entry {
    Entry::decode(&json!({
        "sys": {
            "id": "entry1",
            "version": 3,
            "space": {"sys": {"id": "space1"}},
            "contentType": {"sys": {"id": "blogPost"}}
        },
        "fields": {"title": {"en-US": "Hello"}, "views": {"en-US": 42}}
    }))
    .unwrap()
}

#[tokio::test]
async fn resolves_value_with_declared_kind() {
    let source = FakeSource::new(
        vec![content_type(
            "blogPost",
            &[("title", FieldKind::Symbol), ("views", FieldKind::Integer)],
        )],
        10,
    );
    let resolver = FieldResolver::new(&source);

    let title = resolver.resolve(&blog_entry(), "title").await.unwrap();
    assert_eq!(title.kind(), Some(&FieldKind::Symbol));
    assert_eq!(title.value(), &json!({"en-US": "Hello"}));

    let views = resolver.resolve(&blog_entry(), "views").await.unwrap();
    assert_eq!(views.kind(), Some(&FieldKind::Integer));
    assert_eq!(source.calls(), vec![("space1".to_string(), 0), ("space1".to_string(), 0)]);
}

#[tokio::test]
async fn scans_later_pages_only_when_needed() {
    let source = FakeSource::new(
        vec![
            content_type("author", &[("name", FieldKind::Symbol)]),
            content_type("category", &[("label", FieldKind::Symbol)]),
            content_type("blogPost", &[("title", FieldKind::Text)]),
        ],
        2,
    );
    let resolver = FieldResolver::new(&source);

    let field = resolver.resolve(&blog_entry(), "title").await.unwrap();
    assert_eq!(field.kind(), Some(&FieldKind::Text));
    assert_eq!(source.calls(), vec![("space1".to_string(), 0), ("space1".to_string(), 2)]);
}

#[tokio::test]
async fn stops_after_first_page_when_found() {
    let source = FakeSource::new(
        vec![
            content_type("blogPost", &[("title", FieldKind::Symbol)]),
            content_type("author", &[]),
            content_type("category", &[]),
        ],
        1,
    );
    FieldResolver::new(&source)
        .resolve(&blog_entry(), "title")
        .await
        .unwrap();
    assert_eq!(source.calls().len(), 1);
}

#[tokio::test]
async fn missing_content_type_is_not_found() {
    let source = FakeSource::new(vec![content_type("author", &[])], 10);
    let err = FieldResolver::new(&source)
        .resolve(&blog_entry(), "title")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn missing_field_is_not_found() {
    let source = FakeSource::new(vec![content_type("blogPost", &[("title", FieldKind::Symbol)])], 10);
    let err = FieldResolver::new(&source)
        .resolve(&blog_entry(), "slug")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn declared_field_without_value_resolves_to_null() {
    let source = FakeSource::new(
        vec![content_type("blogPost", &[("summary", FieldKind::Text)])],
        10,
    );
    let field = FieldResolver::new(&source)
        .resolve(&blog_entry(), "summary")
        .await
        .unwrap();
    assert!(field.value().is_null());
    assert_eq!(field.kind(), Some(&FieldKind::Text));
}

#[tokio::test]
async fn entry_without_space_is_a_precondition_failure() {
    let source = FakeSource::new(vec![], 10);
    let entry = Entry::new("blogPost");
    let err = FieldResolver::new(&source)
        .resolve(&entry, "title")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Precondition(_)));
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn empty_space_is_not_found() {
    let source = FakeSource::new(vec![], 10);
    let err = FieldResolver::new(source)
        .resolve(&blog_entry(), "title")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

/// Answers every request with the same first page and `skip: 0`,
/// whatever offset was asked for.
struct StuckSource {
    calls: Mutex<Vec<u64>>,
}

#[async_trait]
impl ContentTypeSource for StuckSource {
    async fn content_type_page(&self, _space_id: &str, skip: u64) -> ClientResult<Page<ContentType>> {
        self.calls.lock().unwrap().push(skip);
        Ok(Page {
            total: 10,
            skip: 0,
            limit: 2,
            items: vec![content_type("author", &[]), content_type("category", &[])],
        })
    }
}

#[tokio::test]
async fn scan_advances_by_requested_offset_when_server_echoes_zero() {
    let source = StuckSource {
        calls: Mutex::new(Vec::new()),
    };
    let err = FieldResolver::new(&source)
        .resolve(&blog_entry(), "title")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
    assert_eq!(*source.calls.lock().unwrap(), vec![0, 2, 4, 6, 8]);
}
