//! Decode errors for the wire model.

use serde_json::Value;
use thiserror::Error;

/// Result type for model decoding.
pub type ModelResult<T> = Result<T, DecodeError>;

/// Errors raised while turning raw JSON into typed model values.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input was expected to be a JSON object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// A recognized key was present with the wrong JSON type.
    #[error("key `{key}` must be {expected}, found {found}")]
    WrongType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A validation object carried none of the known discriminator keys.
    #[error("validation matches no known variant (keys: {keys:?})")]
    UnknownValidation { keys: Vec<String> },

    /// A validation matched a variant but its body did not fit that variant.
    #[error("malformed `{key}` validation: {source}")]
    Validation {
        key: &'static str,
        source: serde_json::Error,
    },

    /// Invalid JSON text or a shape mismatch reported by serde.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    pub(crate) fn not_an_object(value: &Value) -> Self {
        DecodeError::NotAnObject {
            found: json_kind(value),
        }
    }

    pub(crate) fn wrong_type(key: &str, expected: &'static str, value: &Value) -> Self {
        DecodeError::WrongType {
            key: key.to_string(),
            expected,
            found: json_kind(value),
        }
    }
}

/// Human name of a JSON value's type, used in error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
