//! Collection and sync envelopes.

use crate::entry::Entry;
use crate::error::{DecodeError, ModelResult};
use crate::sys::Sys;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One page of a collection endpoint: `{total, skip, limit, items}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Offset of the page after this one, given the `skip` this page was
    /// requested with, or `None` when the collection is exhausted. An empty
    /// page ends the collection regardless of `total`.
    /// The `skip` echoed in the envelope is ignored.
    pub fn next_offset(&self, requested_skip: u64) -> Option<u64> {
        let next = requested_skip + self.items.len() as u64;
        (!self.items.is_empty() && next < self.total).then_some(next)
    }
}

/// One page of the sync endpoint.
///
/// Exactly one of `next_page_url` (more pages in this run) and
/// `next_sync_url` (run finished, resume from here later) is set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPage {
    #[serde(default)]
    pub items: Vec<SyncItem>,
    #[serde(default)]
    pub next_page_url: Option<String>,
    #[serde(default)]
    pub next_sync_url: Option<String>,
}

/// A sync item, discriminated by its `sys.type`.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncItem {
    Entry(Entry),
    DeletedEntry(Sys),
    /// Assets are carried through untouched.
    Asset(Value),
    DeletedAsset(Sys),
    /// Item types this client does not model.
    Other(Value),
}

impl SyncItem {
    pub fn decode(value: &Value) -> ModelResult<Self> {
        let sys_type = value
            .get("sys")
            .and_then(|sys| sys.get("type"))
            .and_then(Value::as_str)
            .ok_or_else(|| DecodeError::WrongType {
                key: "sys.type".to_string(),
                expected: "a string",
                found: "nothing",
            })?;

        let item = match sys_type {
            "Entry" => SyncItem::Entry(Entry::decode(value)?),
            "DeletedEntry" => SyncItem::DeletedEntry(deleted_sys(value)?),
            "Asset" => SyncItem::Asset(value.clone()),
            "DeletedAsset" => SyncItem::DeletedAsset(deleted_sys(value)?),
            _ => SyncItem::Other(value.clone()),
        };
        Ok(item)
    }

    /// Id of the entry or asset this item concerns.
    pub fn id(&self) -> Option<&str> {
        match self {
            SyncItem::Entry(entry) => entry.sys.as_ref().map(|sys| sys.id.as_str()),
            SyncItem::DeletedEntry(sys) | SyncItem::DeletedAsset(sys) => Some(&sys.id),
            SyncItem::Asset(value) | SyncItem::Other(value) => value
                .get("sys")
                .and_then(|sys| sys.get("id"))
                .and_then(Value::as_str),
        }
    }
}

fn deleted_sys(value: &Value) -> ModelResult<Sys> {
    let sys = value.get("sys").unwrap_or(&Value::Null);
    Ok(Sys::deserialize(sys)?)
}

impl<'de> Deserialize<'de> for SyncItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        SyncItem::decode(&value).map_err(serde::de::Error::custom)
    }
}
