//! Configuration for server-side resource processing.

/// Settings used when the core stamps server-managed attributes onto a resource.
///
/// The base URL and protocol version are combined with the resource type's
/// endpoint to build the `meta.location` reference of created resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScimCoreConfig {
    /// Base URL for the SCIM service (without version or path information).
    /// Examples: "https://scim.example.com", "https://api.company.com"
    pub base_url: String,

    /// SCIM protocol version segment used in locations. Defaults to "v2".
    pub scim_version: String,
}

impl Default for ScimCoreConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost".to_string(),
            scim_version: "v2".to_string(),
        }
    }
}

impl ScimCoreConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Override the protocol version segment.
    pub fn with_scim_version(mut self, scim_version: impl Into<String>) -> Self {
        self.scim_version = scim_version.into();
        self
    }

    /// Location URL of a resource served at `endpoint` (e.g. "Users").
    pub fn location(&self, endpoint: &str, resource_id: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.scim_version,
            endpoint.trim_matches('/'),
            resource_id
        )
    }
}
