//! buckets command - List buckets
//!
//! Lists the buckets in the authenticated project.

use clap::Args;
use serde::Serialize;

use gc_core::StorageGateway;

use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// List buckets in the project
#[derive(Args, Debug)]
pub struct BucketsArgs {
    /// Show totals after the listing
    #[arg(long)]
    pub summarize: bool,
}

#[derive(Debug, Serialize)]
struct BucketsOutput {
    buckets: Vec<String>,
    total: usize,
}

/// Execute the buckets command
pub async fn execute(
    args: BucketsArgs,
    gateway: &StorageGateway,
    formatter: &Formatter,
) -> ExitCode {
    match gateway.list_buckets().await {
        Ok(buckets) => {
            if formatter.is_json() {
                formatter.json(&BucketsOutput {
                    total: buckets.len(),
                    buckets,
                });
            } else {
                for bucket in &buckets {
                    formatter.println(&format!("- {bucket}"));
                }
                if args.summarize {
                    formatter.println(&format!("\nTotal: {} buckets", buckets.len()));
                }
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&e.to_string());
            ExitCode::from(&e)
        }
    }
}
