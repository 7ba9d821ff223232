//! gc-gcs: Google Cloud Storage adapter
//!
//! Wraps the `gcloud-storage` client and implements the StorageBackend
//! trait from gc-core. Authentication uses the service-account artifact the
//! credential provider loaded; token exchange and refresh stay inside the
//! SDK.

pub mod client;
mod projection;

pub use client::{connect, GcsBackend};
