//! Dump reader for null-delimited catalog files
//!
//! This module turns the raw bytes of a catalog dump into an ordered token
//! sequence. Dumps carry their fields as byte segments separated by single
//! null bytes; each non-empty segment is decoded as ISO-8859-1 / Latin-1 and
//! trimmed of surrounding whitespace. Decoding is lossless by construction
//! and never fails.
//!
//! ## Architecture
//!
//! - [`reader`] - File reading and byte-level tokenization
//! - [`stats`] - Read statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use catalog_processor::app::services::dump_reader;
//!
//! # fn example() -> catalog_processor::Result<()> {
//! let result = dump_reader::read_dump(std::path::Path::new("catalog.bin"))?;
//! println!(
//!     "Decoded {} tokens from {} segments",
//!     result.tokens.len(),
//!     result.stats.segments_total
//! );
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use reader::{read_dump, tokenize};
pub use stats::{ReadResult, ReadStats};
