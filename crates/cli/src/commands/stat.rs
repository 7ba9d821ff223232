//! stat command - Show metadata
//!
//! Displays bucket metadata, or object metadata when an object name is
//! given. Fields the backend did not report show as "N/A".

use clap::Args;

use gc_core::{BucketDescriptor, ObjectDescriptor, Outcome, StorageGateway};

use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// Show bucket or object metadata
#[derive(Args, Debug)]
pub struct StatArgs {
    /// Bucket name
    pub bucket: String,

    /// Object name (omit to stat the bucket itself)
    pub object: Option<String>,
}

/// Execute the stat command
pub async fn execute(args: StatArgs, gateway: &StorageGateway, formatter: &Formatter) -> ExitCode {
    match &args.object {
        Some(object) => stat_object(gateway, formatter, &args.bucket, object).await,
        None => stat_bucket(gateway, formatter, &args.bucket).await,
    }
}

async fn stat_bucket(gateway: &StorageGateway, formatter: &Formatter, bucket: &str) -> ExitCode {
    match gateway.describe_bucket(bucket).await {
        Ok(descriptor) => {
            if formatter.is_json() {
                formatter.json(&descriptor);
            } else {
                print_bucket(formatter, &descriptor);
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::from(&e)
        }
    }
}

async fn stat_object(
    gateway: &StorageGateway,
    formatter: &Formatter,
    bucket: &str,
    object: &str,
) -> ExitCode {
    match gateway.describe_object(bucket, object).await {
        Ok(Outcome::Ok(descriptor)) => {
            if formatter.is_json() {
                formatter.json(&descriptor);
            } else {
                print_object(formatter, &descriptor);
            }
            ExitCode::Success
        }
        Ok(Outcome::Absent(message)) => {
            formatter.notice(&message);
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::from(&e)
        }
    }
}

fn print_pairs(formatter: &Formatter, pairs: &[(&str, &str)]) {
    for (label, value) in pairs {
        formatter.println(&format!("{label:<26}: {value}"));
    }
}

fn print_bucket(formatter: &Formatter, d: &BucketDescriptor) {
    print_pairs(
        formatter,
        &[
            ("Id", &d.id),
            ("Name", &d.name),
            ("Storage class", &d.storage_class),
            ("Location", &d.location),
            ("Location type", &d.location_type),
            ("CORS rules", &d.cors_rules),
            ("Default event-based hold", &d.default_event_based_hold),
            ("Default KMS key", &d.default_kms_key_name),
            ("Metageneration", &d.metageneration),
            ("Public access prevention", &d.public_access_prevention),
            ("Retention effective time", &d.retention_effective_time),
            ("Retention period", &d.retention_period),
            ("Retention policy locked", &d.retention_policy_locked),
            ("Requester pays", &d.requester_pays),
            ("Self link", &d.self_link),
            ("Time created", &d.time_created),
            ("Versioning enabled", &d.versioning_enabled),
        ],
    );
    for (key, value) in &d.labels {
        formatter.println(&format!("Label {key:<20}: {value}"));
    }
}

fn print_object(formatter: &Formatter, d: &ObjectDescriptor) {
    print_pairs(
        formatter,
        &[
            ("Id", &d.id),
            ("Name", &d.name),
            ("Bucket", &d.bucket),
            ("Storage class", &d.storage_class),
            ("Size", &d.size),
            ("Updated", &d.updated),
            ("Generation", &d.generation),
            ("Metageneration", &d.metageneration),
            ("ETag", &d.etag),
            ("Component count", &d.component_count),
            ("CRC32C", &d.crc32c),
            ("MD5 hash", &d.md5_hash),
            ("Cache control", &d.cache_control),
            ("Content type", &d.content_type),
            ("Content disposition", &d.content_disposition),
            ("Content encoding", &d.content_encoding),
            ("Content language", &d.content_language),
            ("Media link", &d.media_link),
            ("Custom time", &d.custom_time),
            ("Temporary hold", &d.temporary_hold),
            ("Event-based hold", &d.event_based_hold),
            ("Retention expiration", &d.retention_expiration_time),
        ],
    );
    for (key, value) in &d.metadata {
        formatter.println(&format!("Metadata {key:<17}: {value}"));
    }
}
