//! Bucket and object metadata descriptors
//!
//! Read-only projections of backend-reported metadata into flat mappings
//! with stable key names. Fields the backend did not report carry the
//! `"N/A"` sentinel instead of being omitted, timestamps are plain text,
//! and hold flags render as `"enabled"`/`"disabled"`. Descriptors are
//! built per call and never cached.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentinel for fields absent on the backend object
pub const NA: &str = "N/A";

/// Default bucket location when none is requested
pub const DEFAULT_LOCATION: &str = "ASIA-SOUTH1";

/// Default bucket storage class when none is requested
pub const DEFAULT_STORAGE_CLASS: &str = "STANDARD";

/// Parameters for creating a bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBucketSpec {
    pub name: String,
    pub location: String,
    pub storage_class: String,
}

impl CreateBucketSpec {
    /// Build a spec, filling in the fixed default region and tier where the
    /// caller did not choose
    pub fn new(
        name: impl Into<String>,
        location: Option<String>,
        storage_class: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            storage_class: storage_class.unwrap_or_else(|| DEFAULT_STORAGE_CLASS.to_string()),
        }
    }
}

/// Projection of bucket metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketDescriptor {
    pub id: String,
    pub name: String,
    pub storage_class: String,
    pub location: String,
    pub location_type: String,
    pub cors_rules: String,
    pub default_event_based_hold: String,
    pub default_kms_key_name: String,
    pub metageneration: String,
    pub public_access_prevention: String,
    pub retention_effective_time: String,
    pub retention_period: String,
    pub retention_policy_locked: String,
    pub requester_pays: String,
    pub self_link: String,
    pub time_created: String,
    pub versioning_enabled: String,
    pub labels: BTreeMap<String, String>,
}

/// Projection of object metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDescriptor {
    pub id: String,
    pub name: String,
    pub bucket: String,
    pub storage_class: String,
    pub size: String,
    pub updated: String,
    pub generation: String,
    pub metageneration: String,
    pub etag: String,
    pub component_count: String,
    pub crc32c: String,
    pub md5_hash: String,
    pub cache_control: String,
    pub content_type: String,
    pub content_disposition: String,
    pub content_encoding: String,
    pub content_language: String,
    pub metadata: BTreeMap<String, String>,
    pub media_link: String,
    pub custom_time: String,
    pub temporary_hold: String,
    pub event_based_hold: String,
    pub retention_expiration_time: String,
}

/// Render a hold flag as an operator-facing state string
pub fn hold_state(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_bucket_spec_defaults() {
        let spec = CreateBucketSpec::new("logs", None, None);
        assert_eq!(spec.name, "logs");
        assert_eq!(spec.location, "ASIA-SOUTH1");
        assert_eq!(spec.storage_class, "STANDARD");
    }

    #[test]
    fn test_create_bucket_spec_explicit() {
        let spec = CreateBucketSpec::new("archive", Some("EU".into()), Some("NEARLINE".into()));
        assert_eq!(spec.location, "EU");
        assert_eq!(spec.storage_class, "NEARLINE");
    }

    #[test]
    fn test_hold_state() {
        assert_eq!(hold_state(true), "enabled");
        assert_eq!(hold_state(false), "disabled");
    }
}
