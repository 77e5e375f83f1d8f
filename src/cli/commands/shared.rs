//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! the CLI command implementations.

use crate::cli::args::ProcessArgs;
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Tokens decoded from the dump
    pub tokens_read: usize,
    /// Tokens before the first entry boundary, dropped
    pub tokens_skipped: usize,
    /// Catalog entries found
    pub chunks_found: usize,
    /// Records written to the output table
    pub records_written: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Output file size in bytes
    pub output_size: u64,
}

impl ProcessingStats {
    /// Format a byte count in human-readable form
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("catalog_processor={}", log_level)));

    // Set up subscriber based on output format preference
    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (file -> defaults -> args)
pub fn load_configuration(args: &ProcessArgs) -> Result<Config> {
    info!("Loading configuration");

    // Determine config file path
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => {
            // Try default config file location
            default_config_path
                .as_ref()
                .filter(|path| path.exists())
                .map(|path| path.as_path())
        }
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults");
    }

    // Load with layered configuration
    let mut config = Config::load_layered(
        args.input_path.clone(),
        args.output_path.clone(),
        config_file,
    )?;

    // Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &ProcessArgs) {
    config.processing.dry_run = args.dry_run;
    config.processing.force_overwrite = args.force_overwrite;

    config.logging.level = args.get_log_level().to_string();
    config.logging.structured = !args.quiet;
}

/// Check if an error is critical enough to stop processing
pub fn is_critical_error(error: &Error) -> bool {
    matches!(
        error,
        Error::Configuration { .. } | Error::PatternCompilation { .. }
    )
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn process_args(argv: &[&str]) -> ProcessArgs {
        ProcessArgs::parse_from(argv)
    }

    #[test]
    fn test_processing_stats_default() {
        let stats = ProcessingStats::default();
        assert_eq!(stats.tokens_read, 0);
        assert_eq!(stats.chunks_found, 0);
        assert_eq!(stats.records_written, 0);
        assert_eq!(stats.output_size, 0);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(ProcessingStats::format_size(500), "500 B");
        assert_eq!(ProcessingStats::format_size(1536), "1.50 KB");
        assert_eq!(ProcessingStats::format_size(1048576), "1.00 MB");
        assert_eq!(ProcessingStats::format_size(1073741824), "1.00 GB");
    }

    #[test]
    fn test_is_critical_error() {
        let config_error = Error::configuration("Test config error".to_string());
        let pattern_error = Error::pattern_compilation("^$", "bad pattern");
        let io_error = Error::io(
            "Test IO error".to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "test"),
        );

        assert!(is_critical_error(&config_error));
        assert!(is_critical_error(&pattern_error));
        assert!(!is_critical_error(&io_error));
    }

    #[test]
    fn test_apply_cli_overrides() {
        let mut config = Config::default();
        let args = process_args(&["process", "--dry-run", "--force", "--quiet"]);

        apply_cli_overrides(&mut config, &args);
        assert!(config.processing.dry_run);
        assert!(config.processing.force_overwrite);
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.structured);
    }
}
