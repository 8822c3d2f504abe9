//! Field validations and the key-driven variant registry.
//!
//! The wire format carries no type tag for validations. The variant is chosen
//! by which discriminator key the object contains, e.g. `{"size": {...}}` is a
//! [`Size`] and `{"regexp": {...}}` is a [`Regexp`]. Rules are tried in the
//! fixed order of [`RULES`], and every rule whose key is present contributes a
//! variant decoded from the whole object.

use crate::error::{DecodeError, ModelResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::borrow::Cow;

/// A constraint attached to a field or an array item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Validation {
    LinkContentType(LinkContentType),
    MimeTypeGroup(MimeTypeGroup),
    AssetImageDimensions(AssetImageDimensions),
    AssetFileSize(AssetFileSize),
    Unique(Unique),
    PredefinedValues(PredefinedValues),
    Range(Range),
    DateRange(DateRange),
    Size(Size),
    Regexp(Regexp),
}

/// Allowed content types for a link field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkContentType {
    #[serde(rename = "linkContentType")]
    pub content_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Allowed MIME type groups for an asset link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MimeTypeGroup {
    #[serde(rename = "linkMimetypeGroup")]
    pub groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Inclusive integer bounds. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

impl Bounds {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Bounds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Bounds>,
}

/// Pixel bounds for linked image assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetImageDimensions {
    #[serde(rename = "assetImageDimensions")]
    pub dimensions: ImageDimensions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Byte-size bounds for linked assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetFileSize {
    #[serde(rename = "assetFileSize")]
    pub size: Bounds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unique {
    pub unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Closed set of allowed values. Values keep their JSON type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredefinedValues {
    #[serde(rename = "in")]
    pub values: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Numeric bounds kept as JSON numbers so integers and floats re-encode as read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub range: NumericBounds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Date bounds in the ISO-8601 form the server sent them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "dateRange")]
    pub range: DateBounds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Length bounds for text, or element-count bounds for arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub size: Bounds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regexp {
    pub regexp: Pattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A concrete validation shape and the key that selects it.
trait ValidationVariant: DeserializeOwned + Into<Validation> {
    const KEY: &'static str;
}

macro_rules! validation_variant {
    ($($variant:ident => $key:literal),+ $(,)?) => {
        $(
            impl ValidationVariant for $variant {
                const KEY: &'static str = $key;
            }

            impl From<$variant> for Validation {
                fn from(v: $variant) -> Self {
                    Validation::$variant(v)
                }
            }
        )+

        impl Validation {
            /// The discriminator key this variant is recognized by.
            pub fn key(&self) -> &'static str {
                match self {
                    $(Validation::$variant(_) => $key,)+
                }
            }
        }
    };
}

validation_variant! {
    LinkContentType => "linkContentType",
    MimeTypeGroup => "linkMimetypeGroup",
    AssetImageDimensions => "assetImageDimensions",
    AssetFileSize => "assetFileSize",
    Unique => "unique",
    PredefinedValues => "in",
    Range => "range",
    DateRange => "dateRange",
    Size => "size",
    Regexp => "regexp",
}

pub type VariantDecoder = fn(&Value) -> Result<Validation, serde_json::Error>;

fn decode_as<T: ValidationVariant>(value: &Value) -> Result<Validation, serde_json::Error> {
    T::deserialize(value).map(Into::into)
}

/// Discriminator rules, evaluated top to bottom.
pub const RULES: [(&str, VariantDecoder); 10] = [
    (LinkContentType::KEY, decode_as::<LinkContentType>),
    (MimeTypeGroup::KEY, decode_as::<MimeTypeGroup>),
    (AssetImageDimensions::KEY, decode_as::<AssetImageDimensions>),
    (AssetFileSize::KEY, decode_as::<AssetFileSize>),
    (Unique::KEY, decode_as::<Unique>),
    (PredefinedValues::KEY, decode_as::<PredefinedValues>),
    (Range::KEY, decode_as::<Range>),
    (DateRange::KEY, decode_as::<DateRange>),
    (Size::KEY, decode_as::<Size>),
    (Regexp::KEY, decode_as::<Regexp>),
];

/// Decodes one validation object into every variant whose key it carries.
///
/// A well-formed validation yields exactly one variant. Objects carrying
/// several discriminator keys yield one variant per key in rule order, and an
/// object with no known key yields none.
pub fn decode(value: &Value) -> ModelResult<Vec<Validation>> {
    let object = value
        .as_object()
        .ok_or_else(|| DecodeError::not_an_object(value))?;

    let mut decoded = Vec::with_capacity(1);
    for (key, decoder) in RULES {
        if object.contains_key(key) {
            let validation =
                decoder(value).map_err(|source| DecodeError::Validation { key, source })?;
            decoded.push(validation);
        }
    }
    Ok(decoded)
}

/// Decodes one validation object into its first matching variant.
///
/// Fails with [`DecodeError::UnknownValidation`] if no rule matches.
pub fn decode_one(value: &Value) -> ModelResult<Validation> {
    decode(value)?.into_iter().next().ok_or_else(|| {
        let keys = value
            .as_object()
            .map(|object| object.keys().cloned().collect())
            .unwrap_or_default();
        DecodeError::UnknownValidation { keys }
    })
}

/// Decodes a validation list. Elements may be objects or JSON-encoded strings;
/// any other element (including `null`) is a [`DecodeError::NotAnObject`].
///
/// Order is preserved and the first failing element aborts the whole list.
pub fn decode_many(values: &[Value]) -> ModelResult<Vec<Validation>> {
    let mut decoded = Vec::with_capacity(values.len());
    for value in values {
        let object: Cow<'_, Value> = match value {
            Value::String(encoded) => Cow::Owned(serde_json::from_str(encoded)?),
            other => Cow::Borrowed(other),
        };
        decoded.extend(decode(&object)?);
    }
    Ok(decoded)
}

impl<'de> Deserialize<'de> for Validation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_one(&value).map_err(serde::de::Error::custom)
    }
}

impl Size {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self {
            size: Bounds::new(min, max),
            message: None,
        }
    }
}

impl Regexp {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            regexp: Pattern {
                pattern: pattern.into(),
                flags: None,
            },
            message: None,
        }
    }
}

impl Unique {
    pub fn new(unique: bool) -> Self {
        Self {
            unique,
            message: None,
        }
    }
}

impl LinkContentType {
    pub fn new<I, S>(content_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content_types: content_types.into_iter().map(Into::into).collect(),
            message: None,
        }
    }
}
