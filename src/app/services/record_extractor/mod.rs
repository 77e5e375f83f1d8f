//! Record extraction engine for catalog dumps
//!
//! This module turns the token sequence of a catalog dump into fixed-schema
//! records. Dumps carry no field tags, so entry boundaries and field roles
//! are recovered from positional heuristics and value-shape matching.
//!
//! # Architecture
//!
//! The engine is organized into logical components:
//! - [`patterns`] - Compiled token shape patterns and the serial predicate
//! - [`segmenter`] - Splitting the token sequence into per-entry chunks
//! - [`classifier`] - Binding shape labels to the first matching token
//! - [`names`] - Locating the localized name run and mapping it onto columns
//! - [`tail`] - Resolving the additional information and leftover fields
//! - [`extractor`] - Per-chunk pipeline orchestration and record assembly
//! - [`stats`] - Extraction statistics and result structures
//!
//! # Processing Pipeline
//!
//! Each chunk flows through a fixed pipeline with no retries or
//! backtracking; all branching is driven by token shape and by the entry's
//! serial number:
//!
//! 1. **Classification**: each shape label binds to its first matching token
//! 2. **Name mapping**: the variable-length name run is mapped onto the six
//!    name columns, in declared order or in the interleaved order used by
//!    serial 20 entries
//! 3. **Tail resolution**: the token after the rightmost structural match
//!    becomes additional information; whatever remains becomes extra data
//!
//! Chunks are independent: extraction is a pure function of the chunk's
//! tokens and its serial number, and record order equals chunk order.
//!
//! # Example Usage
//!
//! ```rust
//! use catalog_processor::app::services::record_extractor::RecordExtractor;
//!
//! # fn example(tokens: Vec<String>) -> catalog_processor::Result<()> {
//! let extractor = RecordExtractor::new()?;
//! let result = extractor.extract_all(&tokens);
//!
//! println!(
//!     "Extracted {} records from {} chunks",
//!     result.records.len(),
//!     result.stats.chunks_segmented
//! );
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod extractor;
pub mod names;
pub mod patterns;
pub mod segmenter;
pub mod stats;
pub mod tail;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classifier::{Classification, classify_chunk};
pub use extractor::RecordExtractor;
pub use patterns::TokenPatterns;
pub use segmenter::{Segmentation, segment_tokens};
pub use stats::{ExtractionResult, ExtractionStats};

// Re-export utility functions that might be useful externally
pub use names::{assign_name_columns, name_span};
pub use tail::{TailFields, resolve_tail, serialize_extra_data};
