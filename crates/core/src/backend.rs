//! StorageBackend trait definition
//!
//! The capability surface of the external object-storage service. The
//! gateway treats this as an opaque collaborator: adapters translate their
//! SDK's failures into the core error taxonomy (404s become
//! [`Error::NotFound`](crate::Error::NotFound), everything else becomes
//! [`Error::Backend`](crate::Error::Backend)) and the gateway never
//! inspects status codes itself.

use std::path::Path;

use async_trait::async_trait;

use crate::descriptor::{BucketDescriptor, CreateBucketSpec, ObjectDescriptor};
use crate::error::Result;

/// Backend object-storage operations
///
/// Implemented by the GCS adapter and mocked in gateway tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Fetch bucket metadata
    async fn get_bucket(&self, name: &str) -> Result<BucketDescriptor>;

    /// Create a bucket, returning its reported metadata
    async fn create_bucket(&self, spec: &CreateBucketSpec) -> Result<BucketDescriptor>;

    /// List bucket names in the authenticated project
    async fn list_buckets(&self) -> Result<Vec<String>>;

    /// Delete a bucket; the backend rejects non-empty buckets
    async fn delete_bucket(&self, name: &str) -> Result<()>;

    /// Upload a local file as an object
    async fn upload_object(&self, bucket: &str, source: &Path, dest: &str) -> Result<()>;

    /// List object names in a bucket, in backend-returned order
    async fn list_objects(&self, bucket: &str) -> Result<Vec<String>>;

    /// Fetch object metadata
    ///
    /// Returns `Ok(None)` when the bucket exists but the object does not;
    /// a missing bucket is `Error::NotFound`.
    async fn get_object(&self, bucket: &str, name: &str) -> Result<Option<ObjectDescriptor>>;

    /// Delete an object
    async fn delete_object(&self, bucket: &str, name: &str) -> Result<()>;
}
