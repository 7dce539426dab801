//! Content-derived resource versions.
//!
//! A version is computed deterministically from a resource's encoded content
//! and is recorded in `meta.version`. On the wire it appears as a weak ETag
//! (`W/"abc123"`), as described in RFC 7644 section 3.14.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Opaque version identifier of a resource's content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceVersion {
    opaque: String,
}

impl ResourceVersion {
    /// Hash the given content into a version.
    ///
    /// ```rust
    /// use scim_core::resource::ResourceVersion;
    ///
    /// let a = ResourceVersion::from_content(br#"{"userName":"bjensen"}"#);
    /// let b = ResourceVersion::from_content(br#"{"userName":"bjensen"}"#);
    /// assert_eq!(a, b);
    /// assert!(a.etag().starts_with("W/\""));
    /// ```
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        let hash = hasher.finalize();

        Self {
            opaque: BASE64.encode(&hash[..8]), // first 8 bytes keep ETags short
        }
    }

    /// Parse a version from an ETag header value, weak or strong.
    pub fn from_etag(etag: &str) -> Option<Self> {
        let etag = etag.trim();
        let quoted = etag.strip_prefix("W/").unwrap_or(etag);
        let opaque = quoted.strip_prefix('"')?.strip_suffix('"')?;
        if opaque.is_empty() {
            return None;
        }
        Some(Self {
            opaque: opaque.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.opaque
    }

    /// The weak ETag form, `W/"<version>"`.
    pub fn etag(&self) -> String {
        format!("W/\"{}\"", self.opaque)
    }
}

impl fmt::Display for ResourceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.opaque)
    }
}
