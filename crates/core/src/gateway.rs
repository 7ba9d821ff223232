//! Storage gateway
//!
//! The gateway fronts the backend client behind the credential gate. It has
//! two states fixed at construction: disabled (the credential load yielded
//! no identity, so there is no backend client) and active. The transition is
//! one-way and happens exactly once; there is no re-authentication path.
//!
//! Every operation on a disabled gateway emits an authentication-failure
//! line and returns [`Error::Auth`] without touching the backend. Active
//! operations validate their inputs, run exactly one backend call, and
//! record every failure on the operator log at a severity matching its
//! category before returning it.

use std::path::Path;
use std::sync::Arc;

use crate::backend::StorageBackend;
use crate::descriptor::{BucketDescriptor, CreateBucketSpec, ObjectDescriptor};
use crate::error::{Error, Result, Severity};
use crate::listing::GroupedListing;
use crate::ops_log::OpsLog;

/// Result payload for operations with a soft-absence case
///
/// `Absent` is informational, not an error: the target container exists but
/// the requested content does not (an empty bucket, an object name with no
/// object behind it). Callers branch on the variant, never on message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Ok(T),
    Absent(String),
}

impl<T> Outcome<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Outcome::Absent(_))
    }

    /// The payload, if present
    pub fn into_ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Absent(_) => None,
        }
    }
}

/// Credential-gated front over the storage backend
pub struct StorageGateway {
    backend: Option<Box<dyn StorageBackend>>,
    project_id: Option<String>,
    log: Arc<dyn OpsLog>,
}

impl StorageGateway {
    /// Build an active gateway over a constructed backend client
    pub fn active(
        project_id: impl Into<String>,
        backend: Box<dyn StorageBackend>,
        log: Arc<dyn OpsLog>,
    ) -> Self {
        Self {
            backend: Some(backend),
            project_id: Some(project_id.into()),
            log,
        }
    }

    /// Build a disabled gateway; every operation will short-circuit
    pub fn disabled(log: Arc<dyn OpsLog>) -> Self {
        Self {
            backend: None,
            project_id: None,
            log,
        }
    }

    /// Whether a backend client is present
    pub fn is_active(&self) -> bool {
        self.backend.is_some()
    }

    /// Project the gateway authenticated against, if active
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Fetch and project bucket metadata
    pub async fn describe_bucket(&self, bucket: &str) -> Result<BucketDescriptor> {
        let backend = self.require_backend()?;
        self.require_name(bucket, "bucket name")?;

        match backend.get_bucket(bucket).await {
            Ok(descriptor) => {
                self.log
                    .info(&format!("Fetched metadata for bucket '{bucket}'"));
                Ok(descriptor)
            }
            Err(e) => Err(self.report(e)),
        }
    }

    /// Create a bucket with an optional location and storage class
    ///
    /// Defaults are the fixed region and tier from
    /// [`CreateBucketSpec::new`]; the success line reports the values the
    /// backend confirmed.
    pub async fn create_bucket(
        &self,
        bucket: &str,
        location: Option<String>,
        storage_class: Option<String>,
    ) -> Result<()> {
        let backend = self.require_backend()?;
        self.require_name(bucket, "bucket name")?;

        let spec = CreateBucketSpec::new(bucket, location, storage_class);
        match backend.create_bucket(&spec).await {
            Ok(created) => {
                self.log.info(&format!(
                    "Created bucket {} in {} with storage class {}",
                    created.name, created.location, created.storage_class
                ));
                Ok(())
            }
            Err(e) => Err(self.report(e)),
        }
    }

    /// List bucket names in the project
    ///
    /// Re-queries the backend on every call; nothing is cached.
    pub async fn list_buckets(&self) -> Result<Vec<String>> {
        let backend = self.require_backend()?;

        match backend.list_buckets().await {
            Ok(buckets) => {
                self.log
                    .info(&format!("Listed {} bucket(s)", buckets.len()));
                Ok(buckets)
            }
            Err(e) => Err(self.report(e)),
        }
    }

    /// Delete an empty bucket
    ///
    /// A non-empty bucket is rejected by the backend and reported as a
    /// backend error; nothing is retried.
    pub async fn delete_bucket(&self, bucket: &str) -> Result<()> {
        let backend = self.require_backend()?;
        self.require_name(bucket, "bucket name")?;

        match backend.delete_bucket(bucket).await {
            Ok(()) => {
                self.log
                    .info(&format!("Bucket '{bucket}' deleted successfully"));
                Ok(())
            }
            Err(e) => Err(self.report(e)),
        }
    }

    /// Upload a local file to a bucket under the destination object name
    pub async fn upload_object(&self, bucket: &str, source: &Path, dest: &str) -> Result<()> {
        let backend = self.require_backend()?;
        self.require_name(bucket, "bucket name")?;
        self.require_name(dest, "object name")?;

        match backend.upload_object(bucket, source, dest).await {
            Ok(()) => {
                self.log.info(&format!(
                    "Uploaded '{}' to '{dest}' in bucket '{bucket}'",
                    source.display()
                ));
                Ok(())
            }
            Err(e) => Err(self.report(e)),
        }
    }

    /// List a bucket's objects grouped by top-level prefix
    ///
    /// An existing-but-empty bucket is a soft absence, not an error.
    pub async fn list_objects(&self, bucket: &str) -> Result<Outcome<GroupedListing>> {
        let backend = self.require_backend()?;
        self.require_name(bucket, "bucket name")?;

        let names = match backend.list_objects(bucket).await {
            Ok(names) => names,
            Err(e) => return Err(self.report(e)),
        };

        if names.is_empty() {
            let message = format!("Bucket '{bucket}' is empty");
            self.log.info(&message);
            return Ok(Outcome::Absent(message));
        }

        self.log
            .info(&format!("Listed {} object(s) in bucket '{bucket}'", names.len()));
        Ok(Outcome::Ok(GroupedListing::from_names(names)))
    }

    /// Delete an object from a bucket
    pub async fn delete_object(&self, bucket: &str, object: &str) -> Result<()> {
        let backend = self.require_backend()?;
        self.require_name(bucket, "bucket name")?;
        self.require_name(object, "object name")?;

        match backend.delete_object(bucket, object).await {
            Ok(()) => {
                self.log.info(&format!(
                    "Object '{object}' deleted from bucket '{bucket}'"
                ));
                Ok(())
            }
            Err(e) => Err(self.report(e)),
        }
    }

    /// Fetch and project object metadata
    ///
    /// A missing object inside an existing bucket is a soft absence,
    /// distinct from the not-found error a missing bucket produces.
    pub async fn describe_object(
        &self,
        bucket: &str,
        object: &str,
    ) -> Result<Outcome<ObjectDescriptor>> {
        let backend = self.require_backend()?;
        self.require_name(bucket, "bucket name")?;
        self.require_name(object, "object name")?;

        match backend.get_object(bucket, object).await {
            Ok(Some(descriptor)) => {
                self.log
                    .info(&format!("Fetched metadata for object '{object}'"));
                Ok(Outcome::Ok(descriptor))
            }
            Ok(None) => {
                let message =
                    format!("The object '{object}' does not exist in bucket '{bucket}'");
                self.log.info(&message);
                Ok(Outcome::Absent(message))
            }
            Err(e) => Err(self.report(e)),
        }
    }

    fn require_backend(&self) -> Result<&dyn StorageBackend> {
        match &self.backend {
            Some(backend) => Ok(backend.as_ref()),
            None => {
                let err = Error::Auth("no storage client, credential load failed".into());
                self.log.error(&err.to_string());
                Err(err)
            }
        }
    }

    fn require_name(&self, value: &str, what: &str) -> Result<()> {
        if value.is_empty() {
            return Err(self.report(Error::Validation(format!("{what} cannot be empty"))));
        }
        Ok(())
    }

    /// Record a failure on the operator log at its category's severity
    fn report(&self, err: Error) -> Error {
        match err.severity() {
            Severity::Warn => self.log.warn(&err.to_string()),
            Severity::Error => self.log.error(&err.to_string()),
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockStorageBackend;
    use crate::descriptor::NA;
    use crate::ops_log::{Level, MemoryLog};
    use std::collections::BTreeMap;

    fn sample_bucket(name: &str, location: &str, storage_class: &str) -> BucketDescriptor {
        BucketDescriptor {
            id: name.to_string(),
            name: name.to_string(),
            storage_class: storage_class.to_string(),
            location: location.to_string(),
            location_type: NA.to_string(),
            cors_rules: NA.to_string(),
            default_event_based_hold: "disabled".to_string(),
            default_kms_key_name: NA.to_string(),
            metageneration: "1".to_string(),
            public_access_prevention: NA.to_string(),
            retention_effective_time: NA.to_string(),
            retention_period: NA.to_string(),
            retention_policy_locked: NA.to_string(),
            requester_pays: NA.to_string(),
            self_link: NA.to_string(),
            time_created: NA.to_string(),
            versioning_enabled: "false".to_string(),
            labels: BTreeMap::new(),
        }
    }

    fn sample_object(bucket: &str, name: &str) -> ObjectDescriptor {
        ObjectDescriptor {
            id: format!("{bucket}/{name}"),
            name: name.to_string(),
            bucket: bucket.to_string(),
            storage_class: "STANDARD".to_string(),
            size: "42 bytes".to_string(),
            updated: NA.to_string(),
            generation: "1".to_string(),
            metageneration: "1".to_string(),
            etag: "etag".to_string(),
            component_count: NA.to_string(),
            crc32c: NA.to_string(),
            md5_hash: NA.to_string(),
            cache_control: NA.to_string(),
            content_type: "text/plain".to_string(),
            content_disposition: NA.to_string(),
            content_encoding: NA.to_string(),
            content_language: NA.to_string(),
            metadata: BTreeMap::new(),
            media_link: NA.to_string(),
            custom_time: NA.to_string(),
            temporary_hold: "disabled".to_string(),
            event_based_hold: "disabled".to_string(),
            retention_expiration_time: NA.to_string(),
        }
    }

    fn active(backend: MockStorageBackend) -> (StorageGateway, Arc<MemoryLog>) {
        let log = Arc::new(MemoryLog::new());
        let gateway = StorageGateway::active("acme-staging", Box::new(backend), log.clone());
        (gateway, log)
    }

    #[tokio::test]
    async fn test_disabled_gateway_short_circuits_every_operation() {
        let log = Arc::new(MemoryLog::new());
        let gateway = StorageGateway::disabled(log.clone());

        assert!(!gateway.is_active());
        assert!(matches!(
            gateway.describe_bucket("logs").await,
            Err(Error::Auth(_))
        ));
        assert!(matches!(
            gateway.create_bucket("logs", None, None).await,
            Err(Error::Auth(_))
        ));
        assert!(matches!(gateway.list_buckets().await, Err(Error::Auth(_))));
        assert!(matches!(
            gateway.delete_bucket("logs").await,
            Err(Error::Auth(_))
        ));
        assert!(matches!(
            gateway
                .upload_object("logs", Path::new("a.txt"), "a.txt")
                .await,
            Err(Error::Auth(_))
        ));
        assert!(matches!(
            gateway.list_objects("logs").await,
            Err(Error::Auth(_))
        ));
        assert!(matches!(
            gateway.delete_object("logs", "a.txt").await,
            Err(Error::Auth(_))
        ));
        assert!(matches!(
            gateway.describe_object("logs", "a.txt").await,
            Err(Error::Auth(_))
        ));

        // Never silent: one auth-failure line per attempted operation.
        let errors = log
            .lines()
            .into_iter()
            .filter(|(level, _)| *level == Level::Error)
            .count();
        assert_eq!(errors, 8);
        assert!(log.contains(Level::Error, "Authentication failed"));
    }

    #[tokio::test]
    async fn test_empty_bucket_name_fails_before_backend_call() {
        let mut backend = MockStorageBackend::new();
        backend.expect_get_bucket().times(0);
        let (gateway, log) = active(backend);

        let result = gateway.describe_bucket("").await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(log.contains(Level::Warn, "bucket name cannot be empty"));
    }

    #[tokio::test]
    async fn test_empty_object_name_fails_before_backend_call() {
        let mut backend = MockStorageBackend::new();
        backend.expect_get_object().times(0);
        let (gateway, _log) = active(backend);

        let result = gateway.describe_object("logs", "").await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_describe_bucket_not_found() {
        let mut backend = MockStorageBackend::new();
        backend
            .expect_get_bucket()
            .returning(|name| Err(Error::NotFound(format!("bucket '{name}'"))));
        let (gateway, log) = active(backend);

        let result = gateway.describe_bucket("missing").await;
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(log.contains(Level::Warn, "missing"));
    }

    #[tokio::test]
    async fn test_create_then_describe_round_trip() {
        let mut backend = MockStorageBackend::new();
        backend.expect_create_bucket().returning(|spec| {
            Ok(sample_bucket(&spec.name, &spec.location, &spec.storage_class))
        });
        backend
            .expect_get_bucket()
            .returning(|name| Ok(sample_bucket(name, "EU", "NEARLINE")));
        let (gateway, log) = active(backend);

        gateway
            .create_bucket("archive", Some("EU".into()), Some("NEARLINE".into()))
            .await
            .unwrap();
        assert!(log.contains(Level::Info, "Created bucket archive in EU with storage class NEARLINE"));

        let descriptor = gateway.describe_bucket("archive").await.unwrap();
        assert_eq!(descriptor.location, "EU");
        assert_eq!(descriptor.storage_class, "NEARLINE");
    }

    #[tokio::test]
    async fn test_list_objects_empty_bucket_is_soft_absence() {
        let mut backend = MockStorageBackend::new();
        backend.expect_list_objects().returning(|_| Ok(Vec::new()));
        let (gateway, log) = active(backend);

        let outcome = gateway.list_objects("empty-bucket").await.unwrap();
        assert!(outcome.is_absent());
        assert!(log.contains(Level::Info, "is empty"));
    }

    #[tokio::test]
    async fn test_list_objects_groups_names() {
        let mut backend = MockStorageBackend::new();
        backend.expect_list_objects().returning(|_| {
            Ok(vec![
                "a.txt".to_string(),
                "dir/b.txt".to_string(),
                "dir/sub/c.txt".to_string(),
                "d.txt".to_string(),
            ])
        });
        let (gateway, _log) = active(backend);

        let listing = gateway
            .list_objects("logs")
            .await
            .unwrap()
            .into_ok()
            .unwrap();
        assert_eq!(listing.root_entries(), &["a.txt", "d.txt"]);
        assert_eq!(
            listing.group("dir"),
            Some(&["b.txt".to_string(), "sub/c.txt".to_string()][..])
        );
    }

    #[tokio::test]
    async fn test_describe_object_soft_absence_vs_not_found() {
        let mut backend = MockStorageBackend::new();
        backend
            .expect_get_object()
            .withf(|bucket, _| bucket == "logs")
            .returning(|_, _| Ok(None));
        backend
            .expect_get_object()
            .withf(|bucket, _| bucket == "missing")
            .returning(|bucket, _| Err(Error::NotFound(format!("bucket '{bucket}'"))));
        let (gateway, _log) = active(backend);

        // Bucket exists, object does not: informational, not an error.
        let outcome = gateway.describe_object("logs", "nope.txt").await.unwrap();
        match outcome {
            Outcome::Absent(message) => assert!(message.contains("does not exist")),
            Outcome::Ok(_) => panic!("expected soft absence"),
        }

        // Bucket itself missing: hard not-found.
        let result = gateway.describe_object("missing", "nope.txt").await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_describe_object_found() {
        let mut backend = MockStorageBackend::new();
        backend
            .expect_get_object()
            .returning(|bucket, name| Ok(Some(sample_object(bucket, name))));
        let (gateway, _log) = active(backend);

        let descriptor = gateway
            .describe_object("logs", "a.txt")
            .await
            .unwrap()
            .into_ok()
            .unwrap();
        assert_eq!(descriptor.name, "a.txt");
        assert_eq!(descriptor.bucket, "logs");
    }

    #[tokio::test]
    async fn test_delete_bucket_not_found_is_categorized() {
        let mut backend = MockStorageBackend::new();
        backend
            .expect_delete_bucket()
            .returning(|name| Err(Error::NotFound(format!("bucket '{name}'"))));
        let (gateway, log) = active(backend);

        let result = gateway.delete_bucket("missing").await;
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(log.contains(Level::Warn, "Not found"));
    }

    #[tokio::test]
    async fn test_delete_nonempty_bucket_reports_backend_error() {
        let mut backend = MockStorageBackend::new();
        backend
            .expect_delete_bucket()
            .times(1)
            .returning(|_| Err(Error::Backend("409 bucket not empty".into())));
        let (gateway, log) = active(backend);

        let result = gateway.delete_bucket("full").await;
        assert!(matches!(result, Err(Error::Backend(_))));
        assert!(log.contains(Level::Error, "bucket not empty"));
    }

    #[tokio::test]
    async fn test_list_buckets_reports_backend_error() {
        let mut backend = MockStorageBackend::new();
        backend
            .expect_list_buckets()
            .returning(|| Err(Error::Backend("503 unavailable".into())));
        let (gateway, log) = active(backend);

        let result = gateway.list_buckets().await;
        assert!(matches!(result, Err(Error::Backend(_))));
        assert!(log.contains(Level::Error, "503"));
    }
}
