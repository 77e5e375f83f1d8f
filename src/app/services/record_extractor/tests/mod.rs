//! Tests for the record extraction engine
//!
//! This module provides unit tests for segmentation, classification, name
//! mapping and tail resolution, plus shared fixture helpers.

pub mod names_tests;

// Test helper functions and fixtures
use crate::app::models::Chunk;
use crate::app::services::record_extractor::TokenPatterns;

/// Build an owned token sequence from string literals
pub fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Compile a pattern set for testing
pub fn test_patterns() -> TokenPatterns {
    TokenPatterns::new().expect("patterns compile")
}

/// Wrap a token sequence as a single chunk
pub fn chunk(tokens: &[String]) -> Chunk<'_> {
    Chunk::new(tokens)
}

/// A primary part number: 12 uppercase alphanumerics with digits
pub const PART_NUMBER: &str = "AB1234567890";

/// An alternate-format part number: 15 characters with digits and dots
pub const OTHER_FORMAT_PART_NUMBER: &str = "123.456.789.ABC";

/// A reference number: exactly eight digits
pub const REFERENCE_NUMBER: &str = "12345678";
