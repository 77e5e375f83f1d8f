//! Inspect command implementation for catalog processor CLI
//!
//! Reports the token and chunk structure of a dump file without writing
//! any output: segment counts, entry boundaries and the per-entry shape
//! classifications. Useful when a dump produces fewer records than
//! expected.

use super::shared::{ProcessingStats, setup_logging};
use crate::app::models::PatternLabel;
use crate::app::services::dump_reader;
use crate::app::services::record_extractor::{RecordExtractor, classify_chunk, name_span};
use crate::cli::args::InspectArgs;
use crate::Result;
use colored::Colorize;
use std::time::Instant;
use tracing::debug;

/// Inspect command runner for the catalog processor
pub async fn run_inspect(args: InspectArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), false)?;
    debug!("Command line arguments: {:?}", args);

    let input_path = args.get_input_path();
    let read_result = dump_reader::read_dump(&input_path)?;

    let extractor = RecordExtractor::new()?;
    let segmentation = extractor.segment(&read_result.tokens);

    println!(
        "{}",
        format!("Dump structure: {}", input_path.display()).bold()
    );
    println!("  Bytes:    {}", read_result.stats.bytes_read);
    println!(
        "  Segments: {} ({} empty)",
        read_result.stats.segments_total, read_result.stats.segments_empty
    );
    println!("  Tokens:   {}", read_result.stats.tokens_decoded);
    println!("  Entries:  {}", segmentation.chunks.len());

    if segmentation.skipped_prefix_tokens > 0 {
        println!(
            "  {}",
            format!(
                "{} tokens before the first entry boundary will be dropped",
                segmentation.skipped_prefix_tokens
            )
            .yellow()
        );
    }

    if !segmentation.chunks.is_empty() {
        println!();
        for (index, chunk) in segmentation.chunks.iter().take(args.limit).enumerate() {
            let classification = classify_chunk(*chunk, extractor.patterns());
            let names = name_span(chunk, extractor.patterns());

            let mut labels: Vec<String> = Vec::new();
            for &label in PatternLabel::ALL {
                if let Some(text) = classification.get(label) {
                    labels.push(format!("{}={}", label, text));
                }
            }
            let labels = if labels.is_empty() {
                "no shape matches".dimmed().to_string()
            } else {
                labels.join(", ")
            };

            println!(
                "  [{}] serial {:>3}: {} tokens, {} names, {}",
                index,
                chunk.serial(),
                chunk.len(),
                names.len(),
                labels
            );
        }

        if segmentation.chunks.len() > args.limit {
            println!(
                "  ... {} more entries (raise --limit to see them)",
                segmentation.chunks.len() - args.limit
            );
        }
    }

    Ok(ProcessingStats {
        tokens_read: read_result.tokens.len(),
        tokens_skipped: segmentation.skipped_prefix_tokens,
        chunks_found: segmentation.chunks.len(),
        records_written: 0,
        processing_time: start_time.elapsed(),
        output_size: 0,
    })
}
