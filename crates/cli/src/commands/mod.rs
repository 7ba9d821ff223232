//! CLI command definitions and execution
//!
//! This module contains all CLI commands and their implementations. Every
//! storage command loads the credential artifact once, builds the gateway
//! (active or disabled), and runs exactly one gateway operation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use gc_core::{CredentialProvider, OpsLog, StorageGateway, TracingLog, DEFAULT_CREDENTIALS_FILE};

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod buckets;
mod completions;
mod ls;
mod mb;
mod put;
mod rb;
mod rm;
mod stat;

/// gc - Google Cloud Storage CLI client
///
/// A command-line interface for Google Cloud Storage, authenticated with a
/// service-account credentials file.
#[derive(Parser, Debug)]
#[command(name = "gc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the service-account credentials file
    #[arg(long, global = true, default_value = DEFAULT_CREDENTIALS_FILE)]
    pub credentials: PathBuf,

    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List buckets in the project
    Buckets(buckets::BucketsArgs),

    /// Create a bucket
    Mb(mb::MbArgs),

    /// Remove an empty bucket
    Rb(rb::RbArgs),

    /// List objects in a bucket, grouped by top-level prefix
    Ls(ls::LsArgs),

    /// Upload a local file to a bucket
    Put(put::PutArgs),

    /// Remove an object
    Rm(rm::RmArgs),

    /// Show bucket or object metadata
    Stat(stat::StatArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        quiet: cli.quiet,
    };
    let formatter = Formatter::new(output_config);

    match cli.command {
        Commands::Completions(args) => completions::execute(args),
        command => {
            let log: Arc<dyn OpsLog> = Arc::new(TracingLog);
            let credentials = CredentialProvider::with_path(&cli.credentials).load(log.as_ref());
            let gateway = gc_gcs::connect(&credentials, log).await;
            dispatch(command, &gateway, &formatter).await
        }
    }
}

async fn dispatch(command: Commands, gateway: &StorageGateway, formatter: &Formatter) -> ExitCode {
    match command {
        Commands::Buckets(args) => buckets::execute(args, gateway, formatter).await,
        Commands::Mb(args) => mb::execute(args, gateway, formatter).await,
        Commands::Rb(args) => rb::execute(args, gateway, formatter).await,
        Commands::Ls(args) => ls::execute(args, gateway, formatter).await,
        Commands::Put(args) => put::execute(args, gateway, formatter).await,
        Commands::Rm(args) => rm::execute(args, gateway, formatter).await,
        Commands::Stat(args) => stat::execute(args, gateway, formatter).await,
        Commands::Completions(args) => completions::execute(args),
    }
}
