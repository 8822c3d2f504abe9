//! Key-presence view over a JSON object.
//!
//! Decoders first land the wire document in a `serde_json::Map` and then pull
//! typed values out only for keys that are actually present. An absent key (or
//! an explicit `null`) yields `None`; a present key of the wrong JSON type is a
//! [`DecodeError::WrongType`].

use crate::error::{DecodeError, ModelResult};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// `deserialize_with` helper: an explicit `null` decodes like an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) struct RawObject<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> RawObject<'a> {
    pub(crate) fn new(value: &'a Value) -> ModelResult<Self> {
        value
            .as_object()
            .map(|map| Self { map })
            .ok_or_else(|| DecodeError::not_an_object(value))
    }

    /// Returns the raw value for `key`, treating `null` as absent.
    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    pub(crate) fn string(&self, key: &str) -> ModelResult<Option<String>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(DecodeError::wrong_type(key, "a string", other)),
        }
    }

    pub(crate) fn boolean(&self, key: &str) -> ModelResult<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(DecodeError::wrong_type(key, "a boolean", other)),
        }
    }

    pub(crate) fn array(&self, key: &str) -> ModelResult<Option<&'a [Value]>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items.as_slice())),
            Some(other) => Err(DecodeError::wrong_type(key, "an array", other)),
        }
    }
}
