//! gc-core: Core library for the gc Google Cloud Storage client
//!
//! This crate provides the core functionality for the gc CLI, including:
//! - Service-account credential loading
//! - The StorageBackend trait for GCS operations
//! - The StorageGateway with its disabled/active authentication states
//! - Bucket and object metadata descriptors
//! - Grouped object listings
//!
//! This crate is designed to be independent of any specific GCS SDK,
//! allowing for easy testing and potential future support for other backends.

pub mod backend;
pub mod creds;
pub mod descriptor;
pub mod error;
pub mod gateway;
pub mod listing;
pub mod ops_log;

pub use backend::StorageBackend;
pub use creds::{CredentialProvider, Credentials, ServiceAccountKey, DEFAULT_CREDENTIALS_FILE};
pub use descriptor::{
    hold_state, BucketDescriptor, CreateBucketSpec, ObjectDescriptor, DEFAULT_LOCATION,
    DEFAULT_STORAGE_CLASS, NA,
};
pub use error::{Error, Result, Severity};
pub use gateway::{Outcome, StorageGateway};
pub use listing::{GroupedListing, ObjectGroup, ROOT_GROUP};
pub use ops_log::{Level, MemoryLog, OpsLog, TracingLog};
