//! Per-chunk pipeline orchestration and record assembly

use tracing::{debug, info};

use super::classifier::classify_chunk;
use super::names::{assign_name_columns, name_span};
use super::patterns::TokenPatterns;
use super::segmenter::{Segmentation, segment_tokens};
use super::stats::{ExtractionResult, ExtractionStats};
use super::tail::{resolve_tail, serialize_extra_data};
use crate::Result;
use crate::app::models::{CatalogRecord, Chunk, PatternLabel};
use crate::constants::columns;

/// Extraction engine converting token sequences into catalog records
///
/// Holds the compiled pattern set; everything else is computed per chunk.
/// Extraction is deterministic and keeps records in chunk order.
#[derive(Debug)]
pub struct RecordExtractor {
    patterns: TokenPatterns,
}

impl RecordExtractor {
    /// Create an extractor with freshly compiled patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: TokenPatterns::new()?,
        })
    }

    /// Compiled pattern set backing this extractor
    pub fn patterns(&self) -> &TokenPatterns {
        &self.patterns
    }

    /// Split a token sequence into per-entry chunks
    pub fn segment<'a>(&self, tokens: &'a [String]) -> Segmentation<'a> {
        segment_tokens(tokens, &self.patterns)
    }

    /// Extract the record for a single chunk
    pub fn extract_chunk(&self, chunk: Chunk<'_>) -> CatalogRecord {
        let mut record = CatalogRecord::with_serial(chunk.serial());

        // An entry holding nothing but its serial number keeps every other
        // column empty, the extra data placeholder included.
        if chunk.data_fields().is_empty() {
            debug!("Entry {} has no data fields", chunk.serial());
            return record;
        }

        let classification = classify_chunk(chunk, &self.patterns);
        for &label in PatternLabel::ALL {
            if let Some(text) = classification.get(label) {
                record.set(label.column(), text.to_string());
            }
        }

        let names = name_span(&chunk, &self.patterns);
        assign_name_columns(&mut record, chunk.serial(), names);

        let tail = resolve_tail(&chunk, &classification, names);
        if let Some(info) = tail.additional_information {
            record.set(columns::ADDITIONAL_INFORMATION, info);
        }
        record.set(
            columns::EXTRA_DATA,
            serialize_extra_data(&tail.extra_data_tokens),
        );

        record
    }

    /// Segment a token sequence and extract every record in chunk order
    pub fn extract_all(&self, tokens: &[String]) -> ExtractionResult {
        let segmentation = self.segment(tokens);

        let records: Vec<CatalogRecord> = segmentation
            .chunks
            .iter()
            .map(|chunk| self.extract_chunk(*chunk))
            .collect();

        let stats = ExtractionStats {
            tokens_total: tokens.len(),
            tokens_skipped: segmentation.skipped_prefix_tokens,
            chunks_segmented: segmentation.chunks.len(),
            records_extracted: records.len(),
        };

        info!(
            "Extracted {} records from {} chunks ({} tokens)",
            stats.records_extracted, stats.chunks_segmented, stats.tokens_total
        );

        ExtractionResult { records, stats }
    }
}
