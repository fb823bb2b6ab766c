//! Instance identity and tag types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Instance Identity
// ============================================================================

/// Identity document of the running EC2 instance.
///
/// Mirrors the JSON served at
/// `/latest/dynamic/instance-identity/document`; only `instanceId` and
/// `region` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceIdentity {
    /// EC2 instance ID.
    pub instance_id: String,
    /// Region the instance runs in.
    pub region: String,
    /// Owning account ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Availability zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Instance type, e.g. `m5.large`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// AMI the instance was launched from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Primary private IPv4 address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_ip: Option<String>,
}

impl InstanceIdentity {
    /// Creates an identity with only the required fields set.
    pub fn new(instance_id: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            region: region.into(),
            account_id: None,
            availability_zone: None,
            instance_type: None,
            image_id: None,
            private_ip: None,
        }
    }

    /// Parses an identity document.
    pub fn from_document(document: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(document)
    }
}

// ============================================================================
// Tags
// ============================================================================

/// A single resource tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
}

impl Tag {
    /// Creates a tag.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One page of tags returned by a [`crate::TagSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPage {
    /// Tags on this page.
    pub tags: Vec<Tag>,
    /// Token for the next page, absent on the last page.
    pub next_token: Option<String>,
}

impl TagPage {
    /// Creates the final page of a listing.
    pub fn last(tags: Vec<Tag>) -> Self {
        Self {
            tags,
            next_token: None,
        }
    }

    /// Returns true if more pages follow.
    pub fn has_more(&self) -> bool {
        self.next_token.is_some()
    }
}
