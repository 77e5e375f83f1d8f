//! Trailing field resolution
//!
//! After the structural fields are bound, whatever follows them in an entry
//! is split into one "additional information" token and a run of leftover
//! "extra data" tokens.

use super::classifier::Classification;
use crate::app::models::{Chunk, PatternLabel};
use crate::constants::{EXTRA_DATA_PLACEHOLDER, EXTRA_DATA_SEPARATOR, SERIAL_TRUNCATED_TAIL};

/// Resolved trailing fields for one chunk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TailFields {
    /// Token immediately following the rightmost structural match, if any
    pub additional_information: Option<String>,
    /// Leftover tokens after the additional information
    pub extra_data_tokens: Vec<String>,
}

/// Resolve the additional information and extra data fields of a chunk
///
/// The resume position is the index of the bound reference number within the
/// raw chunk (serial token included), falling back to the bound
/// alternate-format part number, then to zero. That index is then applied to
/// the data fields (serial token excluded). Historical output depends on
/// this coordinate reuse, so it is preserved exactly rather than corrected.
///
/// Serial 61 entries discard every data field from the resume position on
/// once the additional information is taken, so nothing of theirs reaches
/// the extra data field.
///
/// Membership in the name run is decided by token text: a trailing token
/// whose text equals any name in the run is treated as part of it.
pub fn resolve_tail(
    chunk: &Chunk<'_>,
    classification: &Classification,
    names: &[String],
) -> TailFields {
    let tokens = chunk.tokens();

    let mut pos = if let Some(reference) = classification.get(PatternLabel::ReferenceNumber) {
        position_of(tokens, reference)
    } else if let Some(other) = classification.get(PatternLabel::OtherFormatPartNumber) {
        position_of(tokens, other)
    } else {
        0
    };

    let mut fields: Vec<String> = chunk.data_fields().to_vec();
    let mut tail = TailFields::default();

    if pos < fields.len() && !is_name(names, &fields[pos]) {
        tail.additional_information = Some(fields[pos].clone());
        pos += 1;
    }

    if chunk.serial() == SERIAL_TRUNCATED_TAIL {
        fields.truncate(pos);
    }

    if pos < fields.len() && !is_name(names, &fields[pos]) {
        tail.extra_data_tokens = fields[pos..].to_vec();
    }

    tail
}

/// Join leftover tokens into the extra data field value
///
/// An empty run serializes as the placeholder, never as an empty string.
pub fn serialize_extra_data(tokens: &[String]) -> String {
    if tokens.is_empty() {
        EXTRA_DATA_PLACEHOLDER.to_string()
    } else {
        tokens.join(EXTRA_DATA_SEPARATOR)
    }
}

/// First position of a token with the given text
fn position_of(tokens: &[String], text: &str) -> usize {
    tokens.iter().position(|t| t.as_str() == text).unwrap_or(0)
}

fn is_name(names: &[String], token: &str) -> bool {
    names.iter().any(|name| name.as_str() == token)
}
