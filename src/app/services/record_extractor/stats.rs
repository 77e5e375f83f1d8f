//! Extraction statistics and result structures

use crate::app::models::CatalogRecord;

/// Statistics collected while extracting records from a token sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Tokens in the input sequence
    pub tokens_total: usize,
    /// Tokens before the first serial token, dropped
    pub tokens_skipped: usize,
    /// Chunks recovered from the sequence
    pub chunks_segmented: usize,
    /// Records produced, one per chunk
    pub records_extracted: usize,
}

/// Records and statistics produced from one token sequence
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    /// Records in chunk order
    pub records: Vec<CatalogRecord>,
    /// Extraction statistics
    pub stats: ExtractionStats,
}
