use contentful_model::{
    ArrayItemSpec, DecodeError, Field, FieldKind, LinkContentType, Regexp, Size, Unique,
    Validation,
};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── FieldKind ────────────────────────────────────────────────────

#[test]
fn field_kind_parses_all_known_kinds() {
    let known = [
        ("Symbol", FieldKind::Symbol),
        ("Text", FieldKind::Text),
        ("Array", FieldKind::Array),
        ("Link", FieldKind::Link),
        ("Integer", FieldKind::Integer),
        ("Number", FieldKind::Number),
        ("Location", FieldKind::Location),
        ("Boolean", FieldKind::Boolean),
        ("Date", FieldKind::Date),
        ("Object", FieldKind::Object),
    ];
    for (s, kind) in known {
        assert_eq!(FieldKind::from(s), kind);
        assert_eq!(kind.as_str(), s);
        assert_eq!(kind.to_string(), s);
    }
}

#[test]
fn field_kind_keeps_unknown_strings() {
    let kind = FieldKind::from("RichText");
    assert_eq!(kind, FieldKind::Other("RichText".into()));
    assert_eq!(serde_json::to_value(&kind).unwrap(), json!("RichText"));
}

#[test]
fn field_kind_serde_uses_wire_names() {
    let kind: FieldKind = serde_json::from_value(json!("Location")).unwrap();
    assert_eq!(kind, FieldKind::Location);
    assert_eq!(serde_json::to_value(FieldKind::Boolean).unwrap(), json!("Boolean"));
}

// ── Field decoding ───────────────────────────────────────────────

#[test]
fn decodes_full_symbol_field() {
    let field = Field::decode(&json!({
        "id": "title",
        "name": "Title",
        "type": "Symbol",
        "required": true,
        "localized": true,
        "disabled": false,
        "omitted": false,
        "validations": [{"unique": true}, {"size": {"max": 80}}]
    }))
    .unwrap();

    assert_eq!(
        field,
        Field::new("title", "Title", FieldKind::Symbol)
            .required()
            .localized()
            .with_validation(Unique::new(true))
            .with_validation(Size::new(None, Some(80)))
    );
}

#[test]
fn absent_keys_keep_zero_values() {
    let field = Field::decode(&json!({})).unwrap();
    assert_eq!(field, Field::default());
    assert!(field.id.is_empty());
    assert!(field.kind.is_none());
    assert!(!field.required);
    assert!(field.validations.is_empty());
}

#[test]
fn null_values_count_as_absent() {
    let field = Field::decode(&json!({"id": "x", "linkType": null, "items": null})).unwrap();
    assert_eq!(field.id, "x");
    assert!(field.link_type.is_none());
    assert!(field.items.is_none());
}

#[test]
fn unknown_keys_are_ignored() {
    let field = Field::decode(&json!({
        "id": "body",
        "type": "Text",
        "defaultValue": {"en-US": "hello"},
        "someFutureFlag": 3
    }))
    .unwrap();
    assert_eq!(field.id, "body");
    assert_eq!(field.kind, Some(FieldKind::Text));
}

#[test]
fn wrong_shape_for_flag_is_an_error() {
    let err = Field::decode(&json!({"id": "x", "required": "yes"})).unwrap_err();
    match err {
        DecodeError::WrongType { key, expected, found } => {
            assert_eq!(key, "required");
            assert_eq!(expected, "a boolean");
            assert_eq!(found, "a string");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn wrong_shape_for_id_is_an_error() {
    let err = Field::decode(&json!({"id": 42})).unwrap_err();
    assert!(matches!(err, DecodeError::WrongType { .. }));
}

#[test]
fn validations_must_be_an_array() {
    let err = Field::decode(&json!({"validations": {"unique": true}})).unwrap_err();
    assert!(matches!(err, DecodeError::WrongType { .. }));
}

#[test]
fn non_object_field_is_an_error() {
    let err = Field::decode(&json!("title")).unwrap_err();
    assert!(matches!(err, DecodeError::NotAnObject { found: "a string" }));
}

#[test]
fn link_field_keeps_link_type() {
    let field = Field::decode(&json!({
        "id": "author",
        "name": "Author",
        "type": "Link",
        "linkType": "Entry",
        "validations": [{"linkContentType": ["person"]}]
    }))
    .unwrap();
    assert_eq!(
        field,
        Field::link("author", "Author", "Entry").with_validation(LinkContentType::new(["person"]))
    );
}

#[test]
fn validations_may_be_json_strings() {
    let field = Field::decode(&json!({
        "id": "slug",
        "type": "Symbol",
        "validations": ["{\"unique\": true}", {"regexp": {"pattern": "^[a-z]+$"}}]
    }))
    .unwrap();
    assert_eq!(
        field.validations,
        vec![
            Validation::Unique(Unique::new(true)),
            Validation::Regexp(Regexp::new("^[a-z]+$")),
        ]
    );
}

#[test]
fn bad_validation_aborts_field_decode() {
    let err = Field::decode(&json!({"validations": [{"range": {"min": "low"}}]})).unwrap_err();
    assert!(matches!(err, DecodeError::Validation { key: "range", .. }));
}

// ── Array items ──────────────────────────────────────────────────

#[test]
fn items_decode_with_their_own_validations() {
    let field = Field::decode(&json!({
        "id": "related",
        "name": "Related",
        "type": "Array",
        "items": {
            "type": "Link",
            "linkType": "Entry",
            "validations": [{"linkContentType": ["blogPost"]}]
        },
        "validations": [{"size": {"max": 5}}]
    }))
    .unwrap();

    let items = field.items.as_ref().expect("items present");
    assert_eq!(items.kind, Some(FieldKind::Link));
    assert_eq!(items.link_type.as_deref(), Some("Entry"));
    assert_eq!(
        items.validations,
        vec![Validation::LinkContentType(LinkContentType::new(["blogPost"]))]
    );
    assert_eq!(field.validations, vec![Validation::Size(Size::new(None, Some(5)))]);
}

#[test]
fn empty_items_object_still_yields_item_spec() {
    let field = Field::decode(&json!({"type": "Array", "items": {}})).unwrap();
    assert_eq!(field.items, Some(ArrayItemSpec::default()));
}

#[test]
fn items_accept_lowercase_linktype() {
    let item = ArrayItemSpec::decode(&json!({"type": "Link", "linktype": "Asset"})).unwrap();
    assert_eq!(item, ArrayItemSpec::links("Asset"));
}

#[test]
fn items_encode_link_type_in_camel_case() {
    let encoded = serde_json::to_value(ArrayItemSpec::links("Asset")).unwrap();
    assert_eq!(encoded, json!({"type": "Link", "linkType": "Asset"}));
}

#[test]
fn items_with_wrong_shape_is_an_error() {
    let err = Field::decode(&json!({"items": ["Symbol"]})).unwrap_err();
    assert!(matches!(err, DecodeError::NotAnObject { .. }));
}

// ── Encoding ─────────────────────────────────────────────────────

#[test]
fn encoding_omits_false_flags_and_empty_lists() {
    let field = Field::new("title", "Title", FieldKind::Symbol);
    assert_eq!(
        serde_json::to_value(&field).unwrap(),
        json!({"id": "title", "name": "Title", "type": "Symbol"})
    );
}

#[test]
fn encoded_field_decodes_back() {
    let field = Field::array("tags", "Tags", ArrayItemSpec::new(FieldKind::Symbol).with_validation(
        Size::new(Some(1), Some(20)),
    ))
    .required()
    .with_validation(Size::new(None, Some(10)));

    let encoded = serde_json::to_value(&field).unwrap();
    let decoded: Field = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, field);
}
