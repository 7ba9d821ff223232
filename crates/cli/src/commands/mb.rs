//! mb command - Make bucket
//!
//! Creates a new bucket with an optional location and storage class.

use clap::Args;

use gc_core::StorageGateway;

use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// Create a bucket
#[derive(Args, Debug)]
pub struct MbArgs {
    /// Bucket name
    pub bucket: String,

    /// Location for the bucket (defaults to ASIA-SOUTH1)
    #[arg(long)]
    pub location: Option<String>,

    /// Storage class for the bucket (defaults to STANDARD)
    #[arg(long = "class")]
    pub storage_class: Option<String>,
}

/// Execute the mb command
pub async fn execute(args: MbArgs, gateway: &StorageGateway, formatter: &Formatter) -> ExitCode {
    match gateway
        .create_bucket(&args.bucket, args.location, args.storage_class)
        .await
    {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&serde_json::json!({
                    "status": "success",
                    "bucket": args.bucket,
                }));
            } else {
                formatter.success(&format!("Bucket '{}' created.", args.bucket));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to create bucket '{}': {e}", args.bucket));
            ExitCode::from(&e)
        }
    }
}
