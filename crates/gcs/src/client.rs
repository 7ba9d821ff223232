//! GCS client implementation
//!
//! Builds an authenticated `gcloud-storage` client from the loaded
//! credential artifact and implements the StorageBackend trait. Backend
//! 404s become `Error::NotFound`; every other response, transport, or
//! token failure becomes `Error::Backend` with the cause in the message.
//! Status codes beyond 404 are not inspected.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use gcloud_storage::client::google_cloud_auth::credentials::CredentialsFile;
use gcloud_storage::client::{Client, ClientConfig};
use gcloud_storage::http::buckets::delete::DeleteBucketRequest;
use gcloud_storage::http::buckets::get::GetBucketRequest;
use gcloud_storage::http::buckets::insert::{
    BucketCreationConfig, InsertBucketParam, InsertBucketRequest,
};
use gcloud_storage::http::buckets::list::ListBucketsRequest;
use gcloud_storage::http::objects::delete::DeleteObjectRequest;
use gcloud_storage::http::objects::get::GetObjectRequest;
use gcloud_storage::http::objects::list::ListObjectsRequest;
use gcloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};
use gcloud_storage::http::Error as HttpError;

use gc_core::{
    BucketDescriptor, CreateBucketSpec, Credentials, Error, ObjectDescriptor, OpsLog, Result,
    StorageBackend, StorageGateway,
};

use crate::projection::{project_bucket, project_object};

/// GCS backend wrapper
pub struct GcsBackend {
    client: Client,
    project_id: String,
}

impl GcsBackend {
    /// Create a backend client from a loaded credential
    ///
    /// The artifact is handed to the SDK, which owns parsing and token
    /// refresh from here on. Construction failures are authentication
    /// failures: the caller falls back to a disabled gateway.
    pub async fn new(credentials: &Credentials) -> Result<Self> {
        let project_id = match credentials.project_id() {
            Some(id) if credentials.key().is_some() => id.to_string(),
            _ => return Err(Error::Auth("no usable service-account credential".into())),
        };

        let artifact = credentials.path().to_string_lossy().to_string();
        let file = CredentialsFile::new_from_file(artifact)
            .await
            .map_err(|e| Error::Auth(format!("service-account file rejected: {e}")))?;
        let config = ClientConfig::default()
            .with_credentials(file)
            .await
            .map_err(|e| Error::Auth(format!("could not build storage client: {e}")))?;

        Ok(Self {
            client: Client::new(config),
            project_id,
        })
    }

    /// Project the client authenticates against
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

#[async_trait]
impl StorageBackend for GcsBackend {
    async fn get_bucket(&self, name: &str) -> Result<BucketDescriptor> {
        let bucket = self
            .client
            .get_bucket(&GetBucketRequest {
                bucket: name.to_string(),
                ..Default::default()
            })
            .await
            .map_err(|e| categorize(format!("bucket '{name}'"), e))?;

        Ok(project_bucket(&bucket))
    }

    async fn create_bucket(&self, spec: &CreateBucketSpec) -> Result<BucketDescriptor> {
        let created = self
            .client
            .insert_bucket(&InsertBucketRequest {
                name: spec.name.clone(),
                param: InsertBucketParam {
                    project: self.project_id.clone(),
                    ..Default::default()
                },
                bucket: BucketCreationConfig {
                    location: spec.location.clone(),
                    storage_class: Some(spec.storage_class.clone()),
                    ..Default::default()
                },
            })
            .await
            .map_err(|e| categorize(format!("bucket '{}'", spec.name), e))?;

        Ok(project_bucket(&created))
    }

    async fn list_buckets(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let response = self
                .client
                .list_buckets(&ListBucketsRequest {
                    project: self.project_id.clone(),
                    page_token: page_token.clone(),
                    ..Default::default()
                })
                .await
                .map_err(|e| categorize("bucket listing".to_string(), e))?;

            names.extend(response.items.into_iter().map(|b| b.name));

            match response.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(names)
    }

    async fn delete_bucket(&self, name: &str) -> Result<()> {
        self.client
            .delete_bucket(&DeleteBucketRequest {
                bucket: name.to_string(),
                ..Default::default()
            })
            .await
            .map_err(|e| categorize(format!("bucket '{name}'"), e))?;

        Ok(())
    }

    async fn upload_object(&self, bucket: &str, source: &Path, dest: &str) -> Result<()> {
        let data = tokio::fs::read(source).await?;

        let mut media = Media::new(dest.to_string());
        media.content_type = mime_guess::from_path(source)
            .first_or_octet_stream()
            .to_string()
            .into();

        self.client
            .upload_object(
                &UploadObjectRequest {
                    bucket: bucket.to_string(),
                    ..Default::default()
                },
                data,
                &UploadType::Simple(media),
            )
            .await
            .map_err(|e| categorize(format!("bucket '{bucket}'"), e))?;

        Ok(())
    }

    async fn list_objects(&self, bucket: &str) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut page_token: Option<String> = None;

        // Full flat listing: no delimiter, drain every page.
        loop {
            let response = self
                .client
                .list_objects(&ListObjectsRequest {
                    bucket: bucket.to_string(),
                    page_token: page_token.clone(),
                    ..Default::default()
                })
                .await
                .map_err(|e| categorize(format!("bucket '{bucket}'"), e))?;

            if let Some(items) = response.items {
                names.extend(items.into_iter().map(|o| o.name));
            }

            match response.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(names)
    }

    async fn get_object(&self, bucket: &str, name: &str) -> Result<Option<ObjectDescriptor>> {
        // Check the bucket first so a missing bucket is NotFound while a
        // missing object inside an existing bucket stays a soft absence.
        self.client
            .get_bucket(&GetBucketRequest {
                bucket: bucket.to_string(),
                ..Default::default()
            })
            .await
            .map_err(|e| categorize(format!("bucket '{bucket}'"), e))?;

        match self
            .client
            .get_object(&GetObjectRequest {
                bucket: bucket.to_string(),
                object: name.to_string(),
                ..Default::default()
            })
            .await
        {
            Ok(object) => Ok(Some(project_object(&object))),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(categorize(format!("object '{name}'"), e)),
        }
    }

    async fn delete_object(&self, bucket: &str, name: &str) -> Result<()> {
        self.client
            .delete_object(&DeleteObjectRequest {
                bucket: bucket.to_string(),
                object: name.to_string(),
                ..Default::default()
            })
            .await
            .map_err(|e| categorize(format!("object '{name}' in bucket '{bucket}'"), e))?;

        Ok(())
    }
}

/// Build a gateway from a credential load result
///
/// No credential means a disabled gateway; a client that cannot be built
/// from a loaded credential is reported and also leaves the gateway
/// disabled. Construction happens once, and the state never changes.
pub async fn connect(credentials: &Credentials, log: Arc<dyn OpsLog>) -> StorageGateway {
    if !credentials.is_loaded() {
        return StorageGateway::disabled(log);
    }

    match GcsBackend::new(credentials).await {
        Ok(backend) => {
            log.info("Storage client created successfully");
            let project_id = backend.project_id().to_string();
            StorageGateway::active(project_id, Box::new(backend), log)
        }
        Err(e) => {
            log.error(&e.to_string());
            StorageGateway::disabled(log)
        }
    }
}

fn is_not_found(err: &HttpError) -> bool {
    matches!(err, HttpError::Response(response) if response.code == 404)
}

fn categorize(target: String, err: HttpError) -> Error {
    if is_not_found(&err) {
        Error::NotFound(target)
    } else {
        Error::Backend(format!("{target}: {err}"))
    }
}
