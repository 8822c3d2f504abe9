use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version assumed for a resource the server has never stamped.
pub const NEW_RESOURCE_VERSION: u64 = 1;

fn new_resource_version() -> u64 {
    NEW_RESOURCE_VERSION
}

/// Server-managed system metadata attached to every resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sys {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub sys_type: Option<String>,
    /// `linkType`, when the server sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(default = "new_resource_version")]
    pub version: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_counter: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Link>,
}

impl Default for Sys {
    fn default() -> Self {
        Self {
            id: String::new(),
            sys_type: None,
            link_type: None,
            version: NEW_RESOURCE_VERSION,
            revision: None,
            published_version: None,
            published_counter: None,
            created_at: None,
            updated_at: None,
            published_at: None,
            first_published_at: None,
            content_type: None,
            space: None,
            environment: None,
        }
    }
}

impl Sys {
    /// Sys block for a resource with a known id and version.
    pub fn with_id(id: impl Into<String>, version: u64) -> Self {
        Self {
            id: id.into(),
            version,
            ..Default::default()
        }
    }

    /// Whether the resource has been persisted and can be addressed by id.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

/// A reference to another resource: `{"sys": {"type": "Link", "linkType": ..., "id": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub sys: LinkSys,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSys {
    #[serde(rename = "type", default = "link_sys_type")]
    pub sys_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    pub id: String,
}

fn link_sys_type() -> String {
    "Link".to_string()
}

impl Link {
    pub fn new(link_type: &str, id: impl Into<String>) -> Self {
        Self {
            sys: LinkSys {
                sys_type: link_sys_type(),
                link_type: Some(link_type.to_string()),
                id: id.into(),
            },
        }
    }

    pub fn content_type(id: impl Into<String>) -> Self {
        Self::new("ContentType", id)
    }

    pub fn space(id: impl Into<String>) -> Self {
        Self::new("Space", id)
    }

    pub fn environment(id: impl Into<String>) -> Self {
        Self::new("Environment", id)
    }

    pub fn id(&self) -> &str {
        &self.sys.id
    }
}

/// A resource that carries optional system metadata and takes part in
/// version-stamped writes.
pub trait Versioned {
    fn sys(&self) -> Option<&Sys>;

    /// The version to echo back on the next write: the server-assigned value,
    /// or [`NEW_RESOURCE_VERSION`] when no metadata is attached.
    fn version(&self) -> u64 {
        self.sys().map_or(NEW_RESOURCE_VERSION, |sys| sys.version)
    }

    /// The resource id, if it has one. An empty id counts as absent.
    fn id(&self) -> Option<&str> {
        self.sys().filter(|sys| sys.has_id()).map(|sys| sys.id.as_str())
    }
}
