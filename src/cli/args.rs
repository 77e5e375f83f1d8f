//! Command-line argument definitions for catalog processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the catalog dump processor
///
/// Converts null-delimited part-catalog dump files into structured CSV
/// tables with one row per catalog entry.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "catalog-processor",
    version,
    about = "Convert null-delimited part-catalog dumps into structured CSV tables",
    long_about = "A tool that converts flat, null-delimited part-catalog dump files into \
                  structured CSV tables. Entry boundaries and field roles carry no tags in \
                  the dump and are recovered from positional heuristics and value-shape \
                  matching: part numbers, reference numbers and localized name runs are \
                  recognized by their shapes and mapped onto a fixed twelve-column schema."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the catalog processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert a catalog dump to a CSV table (main command)
    Process(ProcessArgs),
    /// Report token and chunk structure of a dump file
    Inspect(InspectArgs),
}

/// Arguments for the process command (main conversion)
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input path of the null-delimited dump file
    ///
    /// Fields in the dump are byte segments separated by single null bytes,
    /// decoded as ISO-8859-1 / Latin-1. If not specified, defaults to
    /// source/Input_File_01.txt or the config file's input_path.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input path of the null-delimited dump file"
    )]
    pub input_path: Option<PathBuf>,

    /// Output path of the generated CSV table
    ///
    /// The parent directory will be created if it doesn't exist.
    /// If not specified, defaults to output/catalog.csv or the config
    /// file's output_path.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path of the generated CSV table"
    )]
    pub output_path: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file for default paths and logging. If not
    /// specified, looks for ~/.config/catalog-processor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Perform a dry run without writing any output
    ///
    /// Reads, segments and classifies the dump, then reports what would be
    /// written. Useful for previewing a conversion.
    #[arg(long = "dry-run", help = "Segment and classify without writing output")]
    pub dry_run: bool,

    /// Force overwrite of an existing output file
    ///
    /// By default the processor refuses to replace an existing CSV table.
    #[arg(long = "force", help = "Force overwrite of an existing output file")]
    pub force_overwrite: bool,

    /// Suppress progress output and the final report
    #[arg(short = 'q', long = "quiet", help = "Suppress progress output and the final report")]
    pub quiet: bool,

    /// Log level: trace, debug, info, warn or error
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: Option<String>,
}

impl ProcessArgs {
    /// Effective log level for this invocation
    pub fn get_log_level(&self) -> &str {
        if self.quiet {
            "warn"
        } else {
            self.log_level.as_deref().unwrap_or("info")
        }
    }

    /// Whether to render a progress bar while extracting
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate argument combinations before configuration loading
    pub fn validate(&self) -> Result<()> {
        if let (Some(input), Some(output)) = (&self.input_path, &self.output_path) {
            if input == output {
                return Err(Error::configuration(
                    "Input and output paths must differ".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Arguments for the inspect command (dump diagnostics)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Input path of the null-delimited dump file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input path of the null-delimited dump file"
    )]
    pub input_path: Option<PathBuf>,

    /// Maximum number of entries to detail in the report
    #[arg(
        short = 'n',
        long = "limit",
        value_name = "COUNT",
        default_value_t = 10,
        help = "Maximum number of entries to detail"
    )]
    pub limit: usize,

    /// Log level: trace, debug, info, warn or error
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: Option<String>,
}

impl InspectArgs {
    /// Effective log level for this invocation
    pub fn get_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }

    /// Input path, falling back to the built-in default
    pub fn get_input_path(&self) -> PathBuf {
        self.input_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::constants::DEFAULT_INPUT_FILE))
    }
}
