//! Process command implementation for catalog processor CLI
//!
//! This module contains the complete conversion workflow: configuration
//! loading, dump reading, record extraction, CSV writing and the final
//! report.

use super::shared::{ProcessingStats, create_progress_bar, load_configuration, setup_logging};
use crate::app::services::csv_writer;
use crate::app::services::dump_reader;
use crate::app::services::record_extractor::RecordExtractor;
use crate::cli::args::ProcessArgs;
use crate::config::Config;
use crate::{CatalogRecord, Result};
use colored::Colorize;
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Process command runner for the catalog processor
///
/// This function orchestrates the entire conversion workflow:
/// 1. Set up logging and configuration
/// 2. Read and tokenize the dump file
/// 3. Segment the token sequence and extract one record per entry
/// 4. Write the CSV table and report summary statistics
pub async fn run_process(args: ProcessArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting catalog processor");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with layered approach
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let mut stats = ProcessingStats::default();

    // Read and tokenize the dump
    let read_result = dump_reader::read_dump(&config.processing.input_path)?;
    stats.tokens_read = read_result.tokens.len();

    // Segment into per-entry chunks
    let extractor = RecordExtractor::new()?;
    let segmentation = extractor.segment(&read_result.tokens);
    stats.tokens_skipped = segmentation.skipped_prefix_tokens;
    stats.chunks_found = segmentation.chunks.len();

    if segmentation.chunks.is_empty() {
        warn!(
            "No entry boundary found in {}",
            config.processing.input_path.display()
        );
        println!("No records to write.");
        stats.processing_time = start_time.elapsed();
        return Ok(stats);
    }

    // Extract one record per chunk, in chunk order
    let progress = if args.show_progress() {
        Some(create_progress_bar(
            segmentation.chunks.len() as u64,
            "Extracting records",
        ))
    } else {
        None
    };

    let mut records: Vec<CatalogRecord> = Vec::with_capacity(segmentation.chunks.len());
    for chunk in &segmentation.chunks {
        records.push(extractor.extract_chunk(*chunk));
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    info!(
        "Extracted {} records from {} entries",
        records.len(),
        stats.chunks_found
    );

    if config.processing.dry_run {
        info!(
            "Dry run complete: {} records would be written to {}",
            records.len(),
            config.processing.output_path.display()
        );
        stats.processing_time = start_time.elapsed();
        return Ok(stats);
    }

    // Write the output table
    config.ensure_output_directory()?;
    let write_stats = csv_writer::write_records(
        &config.processing.output_path,
        &records,
        config.processing.force_overwrite,
    )?;
    stats.records_written = write_stats.records_written;
    stats.output_size = write_stats.bytes_written;
    stats.processing_time = start_time.elapsed();

    // Generate final report
    if !args.quiet {
        generate_final_report(&config, &stats);
    }

    Ok(stats)
}

/// Print the conversion summary
fn generate_final_report(config: &Config, stats: &ProcessingStats) {
    println!();
    println!("{}", "Conversion complete".green().bold());
    println!("  Tokens decoded:  {}", stats.tokens_read);
    if stats.tokens_skipped > 0 {
        println!(
            "  {}",
            format!(
                "Tokens dropped before first entry: {}",
                stats.tokens_skipped
            )
            .yellow()
        );
    }
    println!("  Entries found:   {}", stats.chunks_found);
    println!("  Records written: {}", stats.records_written);
    println!(
        "  Output file:     {}",
        config.processing.output_path.display()
    );
    println!(
        "  Output size:     {}",
        ProcessingStats::format_size(stats.output_size)
    );
    println!("  Elapsed:         {}", HumanDuration(stats.processing_time));
}
