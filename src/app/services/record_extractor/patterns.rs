//! Compiled token shape patterns
//!
//! The three shape patterns contain lookaheads, which the `regex` crate
//! deliberately omits, so they are compiled with `fancy_regex`. The serial
//! predicate is a plain character-class pattern and uses `regex`.

use crate::app::models::PatternLabel;
use crate::constants::{
    OTHER_FORMAT_PART_NUMBER_PATTERN, PART_NUMBER_PATTERN, REFERENCE_NUMBER_PATTERN,
    SERIAL_TOKEN_PATTERN,
};
use crate::{Error, Result};

/// Shape patterns compiled once and shared across the extraction pipeline
#[derive(Debug)]
pub struct TokenPatterns {
    part_number: fancy_regex::Regex,
    other_format_part_number: fancy_regex::Regex,
    reference_number: fancy_regex::Regex,
    serial: regex::Regex,
}

impl TokenPatterns {
    /// Compile the full pattern set
    pub fn new() -> Result<Self> {
        Ok(Self {
            part_number: compile_shape(PART_NUMBER_PATTERN)?,
            other_format_part_number: compile_shape(OTHER_FORMAT_PART_NUMBER_PATTERN)?,
            reference_number: compile_shape(REFERENCE_NUMBER_PATTERN)?,
            serial: regex::Regex::new(SERIAL_TOKEN_PATTERN)
                .map_err(|e| Error::pattern_compilation(SERIAL_TOKEN_PATTERN, e.to_string()))?,
        })
    }

    /// Whether a token's text matches the given label's shape
    pub fn matches(&self, label: PatternLabel, token: &str) -> bool {
        let pattern = match label {
            PatternLabel::PartNumber => &self.part_number,
            PatternLabel::OtherFormatPartNumber => &self.other_format_part_number,
            PatternLabel::ReferenceNumber => &self.reference_number,
        };

        // The anchored character-class patterns cannot hit the backtracking
        // limit on trimmed dump tokens; a limit error counts as a non-match.
        pattern.is_match(token).unwrap_or(false)
    }

    /// Whether a token opens a new catalog entry (all digits, length < 4)
    pub fn is_chunk_start(&self, token: &str) -> bool {
        self.serial.is_match(token)
    }

    /// Whether a token terminates the localized name run
    ///
    /// The name run ends at the first token shaped like an alternate-format
    /// part number or a reference number, independent of which tokens the
    /// classifier bound.
    pub fn ends_name_span(&self, token: &str) -> bool {
        self.matches(PatternLabel::OtherFormatPartNumber, token)
            || self.matches(PatternLabel::ReferenceNumber, token)
    }
}

fn compile_shape(pattern: &str) -> Result<fancy_regex::Regex> {
    fancy_regex::Regex::new(pattern).map_err(|e| Error::pattern_compilation(pattern, e.to_string()))
}
