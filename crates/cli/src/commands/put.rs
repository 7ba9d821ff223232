//! put command - Upload a file
//!
//! Uploads a local file to a bucket as a single whole-file upload.

use std::path::PathBuf;

use clap::Args;

use gc_core::StorageGateway;

use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// Upload a local file to a bucket
#[derive(Args, Debug)]
pub struct PutArgs {
    /// Bucket name
    pub bucket: String,

    /// Local file to upload
    pub source: PathBuf,

    /// Destination object name (defaults to the source file name)
    pub dest: Option<String>,
}

/// Execute the put command
pub async fn execute(args: PutArgs, gateway: &StorageGateway, formatter: &Formatter) -> ExitCode {
    let dest = match &args.dest {
        Some(dest) => dest.clone(),
        None => match args.source.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => {
                formatter.error(&format!(
                    "Cannot derive an object name from '{}'",
                    args.source.display()
                ));
                return ExitCode::UsageError;
            }
        },
    };

    match gateway.upload_object(&args.bucket, &args.source, &dest).await {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&serde_json::json!({
                    "status": "success",
                    "bucket": args.bucket,
                    "object": dest,
                }));
            } else {
                formatter.success(&format!(
                    "File '{}' uploaded as '{dest}'.",
                    args.source.display()
                ));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to upload '{}': {e}", args.source.display()));
            ExitCode::from(&e)
        }
    }
}
