//! Command implementations for catalog processor CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Each command is
//! implemented in its own module:
//! - `process`: the dump-to-CSV conversion workflow
//! - `inspect`: token and chunk structure diagnostics

pub mod inspect;
pub mod process;
pub mod shared;

// Re-export the main types and functions for backward compatibility
pub use shared::ProcessingStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};

/// Main command runner for the catalog processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.command {
        Some(Commands::Process(process_args)) => process::run_process(process_args).await,
        Some(Commands::Inspect(inspect_args)) => inspect::run_inspect(inspect_args).await,
        None => Err(Error::configuration("No command provided".to_string())),
    }
}
