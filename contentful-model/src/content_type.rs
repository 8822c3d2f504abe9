use crate::error::ModelResult;
use crate::field::Field;
use crate::raw::null_as_default;
use crate::sys::{Sys, Versioned};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A content type: the schema entries of a space are validated against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sys: Option<Sys>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<Field>,
    /// Id of the field used as the entry title in the web app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_field: Option<String>,
}

impl ContentType {
    /// A content type that has not been persisted yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Decodes a content type from a wire document.
    pub fn decode(value: &Value) -> ModelResult<Self> {
        Ok(Self::deserialize(value)?)
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_display_field(mut self, field_id: impl Into<String>) -> Self {
        self.display_field = Some(field_id.into());
        self
    }

    /// Looks up a field by id.
    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.id == id)
    }

    /// Whether `displayField`, if set, names one of this content type's fields.
    ///
    /// Decoding does not enforce this; callers that need the guarantee check it
    /// before writing.
    pub fn display_field_is_valid(&self) -> bool {
        self.display_field
            .as_deref()
            .is_none_or(|id| self.field(id).is_some())
    }
}

impl Versioned for ContentType {
    fn sys(&self) -> Option<&Sys> {
        self.sys.as_ref()
    }
}
