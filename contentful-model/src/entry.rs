use crate::content_type::ContentType;
use crate::error::ModelResult;
use crate::field::FieldKind;
use crate::sys::{Link, Sys, Versioned};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A content record. Field values are untyped JSON; their declared kind lives
/// on the governing content type and is resolved on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Locale the entry was requested in. When set, `fields` holds flat
    /// values for that locale instead of per-locale maps.
    #[serde(skip)]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sys: Option<Sys>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub fields: Map<String, Value>,
}

impl Entry {
    /// An unpersisted entry governed by `content_type_id`.
    pub fn new(content_type_id: impl Into<String>) -> Self {
        Self {
            locale: None,
            sys: Some(Sys {
                content_type: Some(Link::content_type(content_type_id)),
                ..Default::default()
            }),
            fields: Map::new(),
        }
    }

    /// Decodes an entry from a wire document.
    pub fn decode(value: &Value) -> ModelResult<Self> {
        Ok(Self::deserialize(value)?)
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Id of the governing content type, if the entry references one.
    pub fn content_type_id(&self) -> Option<&str> {
        self.sys
            .as_ref()
            .and_then(|sys| sys.content_type.as_ref())
            .map(Link::id)
    }

    pub fn space_id(&self) -> Option<&str> {
        self.sys.as_ref().and_then(|sys| sys.space.as_ref()).map(Link::id)
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set_field(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Value of `key` for `locale`.
    ///
    /// Entries fetched for a single locale store flat values; entries fetched
    /// without one store `{locale: value}` maps.
    pub fn localized_field(&self, key: &str, locale: &str) -> Option<&Value> {
        let value = self.fields.get(key)?;
        match self.locale.as_deref() {
            Some(requested) if requested == locale => Some(value),
            Some(_) => None,
            None => value.as_object().and_then(|by_locale| by_locale.get(locale)),
        }
    }

    /// Pairs this entry's value for `field_id` with the kind declared on
    /// `content_type`. Returns `None` when the content type has no such field.
    ///
    /// A declared field with no stored value resolves to `Value::Null`.
    pub fn typed_field(&self, content_type: &ContentType, field_id: &str) -> Option<EntryField> {
        let declared = content_type.field(field_id)?;
        let value = self.fields.get(field_id).cloned().unwrap_or(Value::Null);
        Some(EntryField::new(value, declared.kind.clone()))
    }
}

impl Versioned for Entry {
    fn sys(&self) -> Option<&Sys> {
        self.sys.as_ref()
    }
}

/// An entry value paired with its declared kind. Derived, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryField {
    value: Value,
    kind: Option<FieldKind>,
}

impl EntryField {
    pub fn new(value: Value, kind: Option<FieldKind>) -> Self {
        Self { value, kind }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Declared kind, or `None` if the schema field carries no `type`.
    pub fn kind(&self) -> Option<&FieldKind> {
        self.kind.as_ref()
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}
