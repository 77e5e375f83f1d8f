//! Localized name run extraction and column mapping
//!
//! Every entry carries a variable-length run of localized part names. The
//! run starts at a serial-dependent offset into the data fields and ends at
//! the first token shaped like an alternate-format part number or a
//! reference number. The run then maps onto the six name columns: in
//! declared column order for most entries, or in the interleaved slot order
//! used by serial 20 entries. Names beyond the sixth slot are dropped.

use tracing::debug;

use super::patterns::TokenPatterns;
use crate::app::models::{CatalogRecord, Chunk};
use crate::constants::{
    NAME_SLOT_COUNT, SERIAL_INTERLEAVED_NAMES, interleaved_name_column, sequential_name_column,
};

/// Locate the localized name run within a chunk's data fields
///
/// Serial 20 entries start their names at the first data field; all other
/// entries skip one leading data field. The returned slice never overlaps
/// the token that terminated the scan.
pub fn name_span<'a>(chunk: &Chunk<'a>, patterns: &TokenPatterns) -> &'a [String] {
    let data_fields = chunk.data_fields();
    let start = if chunk.serial() == SERIAL_INTERLEAVED_NAMES {
        0
    } else {
        1
    };

    if start >= data_fields.len() {
        return &data_fields[..0];
    }

    let mut end = start;
    for token in &data_fields[start..] {
        if patterns.ends_name_span(token) {
            break;
        }
        end += 1;
    }

    &data_fields[start..end]
}

/// Assign the name run onto the record's name columns
pub fn assign_name_columns(record: &mut CatalogRecord, serial: &str, names: &[String]) {
    let interleaved = serial == SERIAL_INTERLEAVED_NAMES;

    for (index, name) in names.iter().enumerate() {
        let column = if interleaved {
            interleaved_name_column(index)
        } else {
            sequential_name_column(index)
        };

        match column {
            Some(column) => {
                record.set(column, name.clone());
            }
            None => {
                debug!(
                    "Dropping name '{}' at position {} beyond the {} name slots",
                    name, index, NAME_SLOT_COUNT
                );
            }
        }
    }
}
