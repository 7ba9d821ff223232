//! Service-account credential loading
//!
//! Loads a service-account credential artifact from disk and validates that
//! it names a project. The artifact is otherwise opaque: token exchange and
//! refresh are the backend SDK's concern, not ours.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ops_log::OpsLog;

/// Conventional credential artifact name, resolved against the working
/// directory when no explicit path is given.
pub const DEFAULT_CREDENTIALS_FILE: &str = "credentials.json";

/// Parsed service-account credential artifact
///
/// Only the fields this layer inspects are modeled; the SDK re-reads the
/// artifact itself when it builds an authenticated client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceAccountKey {
    /// Credential type, `"service_account"` for the supported artifacts
    #[serde(rename = "type")]
    pub key_type: Option<String>,

    /// Project the credential belongs to
    pub project_id: Option<String>,

    /// Service-account email
    pub client_email: Option<String>,
}

/// Result of a single credential load attempt
///
/// Both halves are absent on any failure; `project_id` is present only when
/// the artifact parsed and named a non-empty project.
#[derive(Debug, Clone)]
pub struct Credentials {
    key: Option<ServiceAccountKey>,
    project_id: Option<String>,
    path: PathBuf,
}

impl Credentials {
    /// Whether a usable identity was loaded
    pub fn is_loaded(&self) -> bool {
        self.key.is_some() && self.project_id.is_some()
    }

    /// The loaded credential, if any
    pub fn key(&self) -> Option<&ServiceAccountKey> {
        self.key.as_ref()
    }

    /// The project identifier extracted from the credential, if any
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    /// Path the artifact was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One-shot loader for the credential artifact
///
/// A provider makes exactly one load attempt; there is no caching across
/// instances and no background refresh.
#[derive(Debug)]
pub struct CredentialProvider {
    path: PathBuf,
}

impl CredentialProvider {
    /// Create a provider reading the conventional `credentials.json`
    pub fn new() -> Self {
        Self::with_path(DEFAULT_CREDENTIALS_FILE)
    }

    /// Create a provider reading a specific artifact path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Attempt to load the credential artifact
    ///
    /// Never fails past this boundary: every problem is reported on the
    /// operator log and collapses to an absent credential.
    pub fn load(&self, log: &dyn OpsLog) -> Credentials {
        let absent = Credentials {
            key: None,
            project_id: None,
            path: self.path.clone(),
        };

        if !self.path.exists() {
            log.error(&format!(
                "Authentication failed: credentials file not found at {}",
                self.path.display()
            ));
            return absent;
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                log.error(&format!(
                    "Authentication failed: could not read {}: {e}",
                    self.path.display()
                ));
                return absent;
            }
        };

        let key: ServiceAccountKey = match serde_json::from_str(&content) {
            Ok(key) => key,
            Err(e) => {
                log.error(&format!(
                    "Authentication failed: {} is not a valid service-account file: {e}",
                    self.path.display()
                ));
                return absent;
            }
        };

        let project_id = match key.project_id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                log.error(&format!(
                    "Authentication failed: no project ID in {}",
                    self.path.display()
                ));
                return absent;
            }
        };

        log.info(&format!(
            "Successfully authenticated with project ID: {project_id}"
        ));

        Credentials {
            key: Some(key),
            project_id: Some(project_id),
            path: self.path.clone(),
        }
    }
}

impl Default for CredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}
