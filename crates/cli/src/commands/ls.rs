//! ls command - List objects
//!
//! Lists a bucket's objects grouped by their top-level prefix: root-level
//! names directly, everything else under a header equal to the first path
//! segment.

use clap::Args;
use serde::Serialize;

use gc_core::{GroupedListing, Outcome, StorageGateway};

use crate::exit_code::ExitCode;
use crate::output::Formatter;

/// List objects in a bucket, grouped by top-level prefix
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Bucket name
    pub bucket: String,

    /// Show totals after the listing
    #[arg(long)]
    pub summarize: bool,
}

#[derive(Debug, Serialize)]
struct LsOutput {
    bucket: String,
    empty: bool,
    listing: GroupedListing,
    total: usize,
}

/// Execute the ls command
pub async fn execute(args: LsArgs, gateway: &StorageGateway, formatter: &Formatter) -> ExitCode {
    match gateway.list_objects(&args.bucket).await {
        Ok(Outcome::Ok(listing)) => {
            if formatter.is_json() {
                formatter.json(&LsOutput {
                    bucket: args.bucket,
                    empty: false,
                    total: listing.len(),
                    listing,
                });
            } else {
                for line in listing.to_string().lines() {
                    formatter.println(line);
                }
                if args.summarize {
                    formatter.println(&format!("\nTotal: {} objects", listing.len()));
                }
            }
            ExitCode::Success
        }
        Ok(Outcome::Absent(message)) => {
            formatter.notice(&message);
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to list objects: {e}"));
            ExitCode::from(&e)
        }
    }
}
