use crate::error::ModelResult;
use crate::raw::RawObject;
use crate::validation::{self, Validation};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// The declared data type of a content type field.
///
/// Type strings the client does not know are kept in [`FieldKind::Other`] and
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    /// Short text, e.g. titles and slugs.
    Symbol,
    /// Long text.
    Text,
    Array,
    Link,
    Integer,
    Number,
    Location,
    Boolean,
    Date,
    Object,
    Other(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Symbol => "Symbol",
            FieldKind::Text => "Text",
            FieldKind::Array => "Array",
            FieldKind::Link => "Link",
            FieldKind::Integer => "Integer",
            FieldKind::Number => "Number",
            FieldKind::Location => "Location",
            FieldKind::Boolean => "Boolean",
            FieldKind::Date => "Date",
            FieldKind::Object => "Object",
            FieldKind::Other(other) => other,
        }
    }
}

impl From<&str> for FieldKind {
    fn from(s: &str) -> Self {
        match s {
            "Symbol" => FieldKind::Symbol,
            "Text" => FieldKind::Text,
            "Array" => FieldKind::Array,
            "Link" => FieldKind::Link,
            "Integer" => FieldKind::Integer,
            "Number" => FieldKind::Number,
            "Location" => FieldKind::Location,
            "Boolean" => FieldKind::Boolean,
            "Date" => FieldKind::Date,
            "Object" => FieldKind::Object,
            other => FieldKind::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldKind {
    fn from(s: String) -> Self {
        match FieldKind::from(s.as_str()) {
            FieldKind::Other(_) => FieldKind::Other(s),
            known => known,
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// One field of a content type schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldKind>,
    /// Target of a `Link` field: `Entry` or `Asset`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    /// Element description of an `Array` field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<ArrayItemSpec>,
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub localized: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub omitted: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<Validation>,
}

impl Field {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: Some(kind),
            ..Default::default()
        }
    }

    /// Shorthand for a `Link` field pointing at `link_type` (`Entry` or `Asset`).
    pub fn link(id: impl Into<String>, name: impl Into<String>, link_type: &str) -> Self {
        Self {
            link_type: Some(link_type.to_string()),
            ..Self::new(id, name, FieldKind::Link)
        }
    }

    /// Shorthand for an `Array` field with the given element spec.
    pub fn array(id: impl Into<String>, name: impl Into<String>, items: ArrayItemSpec) -> Self {
        Self {
            items: Some(items),
            ..Self::new(id, name, FieldKind::Array)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn localized(mut self) -> Self {
        self.localized = true;
        self
    }

    pub fn with_validation(mut self, validation: impl Into<Validation>) -> Self {
        self.validations.push(validation.into());
        self
    }

    /// Decodes a field from its wire object.
    ///
    /// Every recognized key is read independently. Absent keys keep their
    /// zero value and unknown keys are ignored.
    pub fn decode(value: &Value) -> ModelResult<Self> {
        let raw = RawObject::new(value)?;
        let mut field = Field::default();

        if let Some(id) = raw.string("id")? {
            field.id = id;
        }
        if let Some(name) = raw.string("name")? {
            field.name = name;
        }
        field.kind = raw.string("type")?.map(FieldKind::from);
        field.link_type = raw.string("linkType")?;
        if let Some(items) = raw.get("items") {
            field.items = Some(ArrayItemSpec::decode(items)?);
        }
        field.required = raw.boolean("required")?.unwrap_or_default();
        field.localized = raw.boolean("localized")?.unwrap_or_default();
        field.disabled = raw.boolean("disabled")?.unwrap_or_default();
        field.omitted = raw.boolean("omitted")?.unwrap_or_default();
        if let Some(validations) = raw.array("validations")? {
            field.validations = validation::decode_many(validations)?;
        }

        Ok(field)
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Field::decode(&value).map_err(serde::de::Error::custom)
    }
}

/// Element description for `Array` fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayItemSpec {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validations: Vec<Validation>,
}

impl ArrayItemSpec {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    /// Items that link to entries or assets.
    pub fn links(link_type: &str) -> Self {
        Self {
            link_type: Some(link_type.to_string()),
            ..Self::new(FieldKind::Link)
        }
    }

    pub fn with_validation(mut self, validation: impl Into<Validation>) -> Self {
        self.validations.push(validation.into());
        self
    }

    /// Decodes an `items` object. The link type is read from `linkType`, or
    /// from the lower-case `linktype` some older payloads use.
    pub fn decode(value: &Value) -> ModelResult<Self> {
        let raw = RawObject::new(value)?;
        let mut item = ArrayItemSpec {
            kind: raw.string("type")?.map(FieldKind::from),
            ..Default::default()
        };

        item.link_type = match raw.string("linkType")? {
            Some(link_type) => Some(link_type),
            None => raw.string("linktype")?,
        };
        if let Some(validations) = raw.array("validations")? {
            item.validations = validation::decode_many(validations)?;
        }

        Ok(item)
    }
}

impl<'de> Deserialize<'de> for ArrayItemSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ArrayItemSpec::decode(&value).map_err(serde::de::Error::custom)
    }
}
