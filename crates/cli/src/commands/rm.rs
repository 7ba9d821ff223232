//! rm command - Remove an object
//!
//! Removes a single object from a bucket.

use clap::Args;

use gc_core::StorageGateway;

use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// Remove an object
#[derive(Args, Debug)]
pub struct RmArgs {
    /// Bucket name
    pub bucket: String,

    /// Object name
    pub object: String,
}

/// Execute the rm command
pub async fn execute(args: RmArgs, gateway: &StorageGateway, formatter: &Formatter) -> ExitCode {
    match gateway.delete_object(&args.bucket, &args.object).await {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&serde_json::json!({
                    "status": "success",
                    "bucket": args.bucket,
                    "object": args.object,
                }));
            } else {
                formatter.success(&format!(
                    "Object '{}' deleted from '{}'.",
                    args.object, args.bucket
                ));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to delete object '{}': {e}", args.object));
            ExitCode::from(&e)
        }
    }
}
