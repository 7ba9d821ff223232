//! Metadata projection
//!
//! Projects the SDK's bucket and object models into the core descriptors.
//! The projection goes through the model's JSON form, so the fixed field
//! set is read by the stable JSON API key names and every absent field
//! collapses to the `"N/A"` sentinel, whatever its type would have been.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use gc_core::{hold_state, BucketDescriptor, ObjectDescriptor, NA};

/// Project bucket metadata into its descriptor
pub(crate) fn project_bucket<T: Serialize>(bucket: &T) -> BucketDescriptor {
    let v = serde_json::to_value(bucket).unwrap_or(Value::Null);

    BucketDescriptor {
        id: text(&v, "id"),
        name: text(&v, "name"),
        storage_class: text(&v, "storageClass"),
        location: text(&v, "location"),
        location_type: text(&v, "locationType"),
        cors_rules: count(&v, "cors"),
        default_event_based_hold: flag(&v, "defaultEventBasedHold"),
        default_kms_key_name: text(&v, "encryption.defaultKmsKeyName"),
        metageneration: text(&v, "metageneration"),
        public_access_prevention: text(&v, "iamConfiguration.publicAccessPrevention"),
        retention_effective_time: text(&v, "retentionPolicy.effectiveTime"),
        retention_period: text(&v, "retentionPolicy.retentionPeriod"),
        retention_policy_locked: text(&v, "retentionPolicy.isLocked"),
        requester_pays: text(&v, "billing.requesterPays"),
        self_link: text(&v, "selfLink"),
        time_created: text(&v, "timeCreated"),
        versioning_enabled: bool_text(&v, "versioning.enabled"),
        labels: string_map(&v, "labels"),
    }
}

/// Project object metadata into its descriptor
pub(crate) fn project_object<T: Serialize>(object: &T) -> ObjectDescriptor {
    let v = serde_json::to_value(object).unwrap_or(Value::Null);

    ObjectDescriptor {
        id: text(&v, "id"),
        name: text(&v, "name"),
        bucket: text(&v, "bucket"),
        storage_class: text(&v, "storageClass"),
        size: size_text(&v),
        updated: text(&v, "updated"),
        generation: text(&v, "generation"),
        metageneration: text(&v, "metageneration"),
        etag: text(&v, "etag"),
        component_count: text(&v, "componentCount"),
        crc32c: text(&v, "crc32c"),
        md5_hash: text(&v, "md5Hash"),
        cache_control: text(&v, "cacheControl"),
        content_type: text(&v, "contentType"),
        content_disposition: text(&v, "contentDisposition"),
        content_encoding: text(&v, "contentEncoding"),
        content_language: text(&v, "contentLanguage"),
        metadata: string_map(&v, "metadata"),
        media_link: text(&v, "mediaLink"),
        custom_time: text(&v, "customTime"),
        temporary_hold: flag(&v, "temporaryHold"),
        event_based_hold: flag(&v, "eventBasedHold"),
        retention_expiration_time: text(&v, "retentionExpirationTime"),
    }
}

/// Walk a dotted key path, treating JSON null as absent
fn get<'a>(v: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(v, |acc, key| acc.get(key))
        .filter(|v| !v.is_null())
}

/// Render a field as text, `"N/A"` when absent or empty
///
/// The JSON API reports some numeric fields as strings and others as
/// numbers; both render the same way here.
fn text(v: &Value, path: &str) -> String {
    match get(v, path) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => NA.to_string(),
    }
}

/// Render a boolean that defaults to false when unreported
fn bool_text(v: &Value, path: &str) -> String {
    get(v, path)
        .and_then(Value::as_bool)
        .unwrap_or(false)
        .to_string()
}

/// Render a hold flag; an unreported hold is not in effect
fn flag(v: &Value, path: &str) -> String {
    hold_state(get(v, path).and_then(Value::as_bool).unwrap_or(false)).to_string()
}

/// Render an array field as its entry count
fn count(v: &Value, path: &str) -> String {
    match get(v, path).and_then(Value::as_array) {
        Some(entries) => entries.len().to_string(),
        None => NA.to_string(),
    }
}

fn size_text(v: &Value) -> String {
    match get(v, "size") {
        Some(Value::Number(n)) => format!("{n} bytes"),
        Some(Value::String(s)) if !s.is_empty() => format!("{s} bytes"),
        _ => NA.to_string(),
    }
}

fn string_map(v: &Value, path: &str) -> BTreeMap<String, String> {
    get(v, path)
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default()
}
