//! Shape classification of chunk tokens
//!
//! Scans a chunk's tokens in order (serial token included) and binds each
//! shape label to the first token matching its pattern. Labels bind
//! independently; a token that satisfies several shapes can carry several
//! labels, with registration order deciding nothing beyond bookkeeping
//! because the patterns are mutually near-exclusive by construction.

use super::patterns::TokenPatterns;
use crate::app::models::{Chunk, PatternLabel};

/// Tokens bound to shape labels within one chunk
///
/// A label with no matching token stays unbound and the corresponding
/// output column stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    part_number: Option<String>,
    other_format_part_number: Option<String>,
    reference_number: Option<String>,
}

impl Classification {
    /// Text bound to a label, if any token matched
    pub fn get(&self, label: PatternLabel) -> Option<&str> {
        match label {
            PatternLabel::PartNumber => self.part_number.as_deref(),
            PatternLabel::OtherFormatPartNumber => self.other_format_part_number.as_deref(),
            PatternLabel::ReferenceNumber => self.reference_number.as_deref(),
        }
    }

    /// Number of bound labels
    pub fn bound_count(&self) -> usize {
        PatternLabel::ALL
            .iter()
            .filter(|label| self.get(**label).is_some())
            .count()
    }

    fn bind(&mut self, label: PatternLabel, text: &str) {
        let slot = match label {
            PatternLabel::PartNumber => &mut self.part_number,
            PatternLabel::OtherFormatPartNumber => &mut self.other_format_part_number,
            PatternLabel::ReferenceNumber => &mut self.reference_number,
        };
        if slot.is_none() {
            *slot = Some(text.to_string());
        }
    }
}

/// Classify a chunk's tokens by shape, first match winning per label
pub fn classify_chunk(chunk: Chunk<'_>, patterns: &TokenPatterns) -> Classification {
    let mut classification = Classification::default();

    for token in chunk.tokens() {
        for &label in PatternLabel::ALL {
            if classification.get(label).is_none() && patterns.matches(label, token) {
                classification.bind(label, token);
            }
        }

        if classification.bound_count() == PatternLabel::ALL.len() {
            break;
        }
    }

    classification
}
