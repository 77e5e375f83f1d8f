//! Data models for catalog processing
//!
//! This module contains the core data structures for representing catalog
//! entry chunks and the fixed-schema records produced from them.

use crate::constants::columns;
use serde::{Deserialize, Serialize};

// =============================================================================
// Pattern Labels
// =============================================================================

/// Semantic roles recognized by token shape, in registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternLabel {
    /// Primary part number
    PartNumber,
    /// Part number in the alternate dotted format
    OtherFormatPartNumber,
    /// Eight-digit reference number
    ReferenceNumber,
}

impl PatternLabel {
    /// All labels in registration order; earlier labels win when a token
    /// satisfies more than one shape
    pub const ALL: &'static [PatternLabel] = &[
        PatternLabel::PartNumber,
        PatternLabel::OtherFormatPartNumber,
        PatternLabel::ReferenceNumber,
    ];

    /// Output column receiving tokens bound to this label
    pub fn column(&self) -> &'static str {
        match self {
            PatternLabel::PartNumber => columns::PART_NUMBER,
            PatternLabel::OtherFormatPartNumber => columns::PART_NUMBER_OTHER_FORMAT,
            PatternLabel::ReferenceNumber => columns::REFERENCE_NUMBER,
        }
    }
}

impl std::fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

// =============================================================================
// Chunk
// =============================================================================

/// A contiguous run of tokens representing one catalog entry
///
/// The first token is always the serial token that opened the entry; the
/// remaining tokens are its data fields. Chunks borrow from the token
/// sequence produced by the dump reader and are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    tokens: &'a [String],
}

impl<'a> Chunk<'a> {
    /// Wrap a token run as a chunk. The run must start with its serial token.
    pub fn new(tokens: &'a [String]) -> Self {
        debug_assert!(!tokens.is_empty(), "a chunk always holds its serial token");
        Self { tokens }
    }

    /// All tokens including the serial token
    pub fn tokens(&self) -> &'a [String] {
        self.tokens
    }

    /// The serial token that opened this entry
    pub fn serial(&self) -> &'a str {
        &self.tokens[0]
    }

    /// Tokens after the serial token
    pub fn data_fields(&self) -> &'a [String] {
        &self.tokens[1..]
    }

    /// Number of tokens including the serial token
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// A chunk is never empty; kept for iterator-style call sites
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// =============================================================================
// Catalog Record
// =============================================================================

/// One output row of the catalog table
///
/// All columns default to the empty string and are overlaid field by field
/// as the extraction pipeline runs; the column order of the serialized row
/// is fixed regardless of fill order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub serial_number: String,
    pub part_number: String,
    pub part_name_english: String,
    pub part_name_language_1: String,
    pub part_name_language_2: String,
    pub part_name_language_3: String,
    pub part_name_language_4: String,
    pub part_name_language_5: String,
    pub part_number_other_format: String,
    pub reference_number: String,
    pub additional_information: String,
    pub extra_data: String,
}

impl CatalogRecord {
    /// Create a record holding only its serial number
    pub fn with_serial(serial: impl Into<String>) -> Self {
        Self {
            serial_number: serial.into(),
            ..Self::default()
        }
    }

    /// Set a field by output column name. Returns false for unknown columns.
    pub fn set(&mut self, column: &str, value: String) -> bool {
        let slot = match column {
            columns::SERIAL_NUMBER => &mut self.serial_number,
            columns::PART_NUMBER => &mut self.part_number,
            columns::PART_NAME_ENGLISH => &mut self.part_name_english,
            columns::PART_NAME_LANGUAGE_1 => &mut self.part_name_language_1,
            columns::PART_NAME_LANGUAGE_2 => &mut self.part_name_language_2,
            columns::PART_NAME_LANGUAGE_3 => &mut self.part_name_language_3,
            columns::PART_NAME_LANGUAGE_4 => &mut self.part_name_language_4,
            columns::PART_NAME_LANGUAGE_5 => &mut self.part_name_language_5,
            columns::PART_NUMBER_OTHER_FORMAT => &mut self.part_number_other_format,
            columns::REFERENCE_NUMBER => &mut self.reference_number,
            columns::ADDITIONAL_INFORMATION => &mut self.additional_information,
            columns::EXTRA_DATA => &mut self.extra_data,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Get a field by output column name
    pub fn get(&self, column: &str) -> Option<&str> {
        let value = match column {
            columns::SERIAL_NUMBER => &self.serial_number,
            columns::PART_NUMBER => &self.part_number,
            columns::PART_NAME_ENGLISH => &self.part_name_english,
            columns::PART_NAME_LANGUAGE_1 => &self.part_name_language_1,
            columns::PART_NAME_LANGUAGE_2 => &self.part_name_language_2,
            columns::PART_NAME_LANGUAGE_3 => &self.part_name_language_3,
            columns::PART_NAME_LANGUAGE_4 => &self.part_name_language_4,
            columns::PART_NAME_LANGUAGE_5 => &self.part_name_language_5,
            columns::PART_NUMBER_OTHER_FORMAT => &self.part_number_other_format,
            columns::REFERENCE_NUMBER => &self.reference_number,
            columns::ADDITIONAL_INFORMATION => &self.additional_information,
            columns::EXTRA_DATA => &self.extra_data,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Field values in declared column order, for serialization
    pub fn to_row(&self) -> [&str; 12] {
        [
            &self.serial_number,
            &self.part_number,
            &self.part_name_english,
            &self.part_name_language_1,
            &self.part_name_language_2,
            &self.part_name_language_3,
            &self.part_name_language_4,
            &self.part_name_language_5,
            &self.part_number_other_format,
            &self.reference_number,
            &self.additional_information,
            &self.extra_data,
        ]
    }
}
