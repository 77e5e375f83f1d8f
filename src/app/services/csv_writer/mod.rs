//! CSV table writer for catalog records
//!
//! This module serializes extracted records into a delimited text table
//! with a header row. Fields containing the delimiter or quotes are quoted
//! per standard CSV escaping; column order is fixed by the output schema.
//!
//! ## Architecture
//!
//! - [`writer`] - File creation, header and row serialization
//! - [`stats`] - Write statistics
//!
//! ## Usage
//!
//! ```rust
//! use catalog_processor::app::services::csv_writer;
//! use catalog_processor::app::models::CatalogRecord;
//!
//! # fn example(records: Vec<CatalogRecord>) -> catalog_processor::Result<()> {
//! let stats = csv_writer::write_records(
//!     std::path::Path::new("output/catalog.csv"),
//!     &records,
//!     false,
//! )?;
//! println!("Wrote {} records", stats.records_written);
//! # Ok(())
//! # }
//! ```

pub mod stats;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use stats::WriteStats;
pub use writer::write_records;
