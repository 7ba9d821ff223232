//! rb command - Remove bucket
//!
//! Removes an empty bucket. A non-empty bucket is rejected by the backend.

use clap::Args;

use gc_core::StorageGateway;

use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// Remove an empty bucket
#[derive(Args, Debug)]
pub struct RbArgs {
    /// Bucket name
    pub bucket: String,
}

/// Execute the rb command
pub async fn execute(args: RbArgs, gateway: &StorageGateway, formatter: &Formatter) -> ExitCode {
    match gateway.delete_bucket(&args.bucket).await {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&serde_json::json!({
                    "status": "success",
                    "bucket": args.bucket,
                }));
            } else {
                formatter.success(&format!("Bucket '{}' removed.", args.bucket));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to remove bucket '{}': {e}", args.bucket));
            ExitCode::from(&e)
        }
    }
}
