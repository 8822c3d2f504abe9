//! Resource paths under a space.

/// The space (and optional environment) a request addresses.
///
/// Every path segment taken from caller data is percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    space_id: String,
    environment_id: Option<String>,
}

impl Scope {
    pub fn new(space_id: impl Into<String>, environment_id: Option<String>) -> Self {
        Self {
            space_id: space_id.into(),
            environment_id,
        }
    }

    pub fn space_id(&self) -> &str {
        &self.space_id
    }

    pub fn environment_id(&self) -> Option<&str> {
        self.environment_id.as_deref()
    }

    /// `/spaces/{space}` or `/spaces/{space}/environments/{env}`.
    pub fn root(&self) -> String {
        let mut path = format!("/spaces/{}", urlencoding::encode(&self.space_id));
        if let Some(env) = &self.environment_id {
            path.push_str("/environments/");
            path.push_str(&urlencoding::encode(env));
        }
        path
    }

    pub fn content_types(&self) -> String {
        format!("{}/content_types", self.root())
    }

    pub fn content_type(&self, id: &str) -> String {
        format!("{}/{}", self.content_types(), urlencoding::encode(id))
    }

    pub fn content_type_published(&self, id: &str) -> String {
        format!("{}/published", self.content_type(id))
    }

    pub fn entries(&self) -> String {
        format!("{}/entries", self.root())
    }

    pub fn entry(&self, id: &str) -> String {
        format!("{}/{}", self.entries(), urlencoding::encode(id))
    }

    pub fn entry_published(&self, id: &str) -> String {
        format!("{}/published", self.entry(id))
    }

    pub fn sync(&self) -> String {
        format!("{}/sync", self.root())
    }
}
