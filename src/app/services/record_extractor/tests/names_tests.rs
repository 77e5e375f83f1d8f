//! Tests for name run extraction and column mapping

use super::{OTHER_FORMAT_PART_NUMBER, REFERENCE_NUMBER, chunk, test_patterns, tokens};
use crate::app::models::CatalogRecord;
use crate::app::services::record_extractor::{assign_name_columns, name_span};
use crate::constants::columns;

#[test]
fn test_span_skips_first_data_field_for_ordinary_serials() {
    let tokens = tokens(&["7", "CODE", "NAME1", "NAME2", REFERENCE_NUMBER]);
    let span = name_span(&chunk(&tokens), &test_patterns());

    assert_eq!(span, &tokens[2..4]);
}

#[test]
fn test_span_starts_at_first_data_field_for_serial_20() {
    let tokens = tokens(&["20", "NAME1", "NAME2", REFERENCE_NUMBER]);
    let span = name_span(&chunk(&tokens), &test_patterns());

    assert_eq!(span, &tokens[1..3]);
}

#[test]
fn test_span_stops_at_other_format_part_number() {
    let tokens = tokens(&["7", "CODE", "NAME1", OTHER_FORMAT_PART_NUMBER, "trailer"]);
    let span = name_span(&chunk(&tokens), &test_patterns());

    assert_eq!(span, &tokens[2..3]);
}

#[test]
fn test_span_runs_to_end_without_terminator() {
    let tokens = tokens(&["7", "CODE", "NAME1", "NAME2", "NAME3"]);
    let span = name_span(&chunk(&tokens), &test_patterns());

    assert_eq!(span, &tokens[2..]);
}

#[test]
fn test_span_is_empty_when_no_fields_remain() {
    // A single data field is consumed by the skipped leading position
    let toks = tokens(&["7", "CODE"]);
    let span = name_span(&chunk(&toks), &test_patterns());
    assert!(span.is_empty());

    let toks = tokens(&["7"]);
    let span = name_span(&chunk(&toks), &test_patterns());
    assert!(span.is_empty());
}

#[test]
fn test_sequential_mapping_fills_declared_order() {
    let names = tokens(&["EN", "L1", "L2", "L3", "L4", "L5"]);
    let mut record = CatalogRecord::default();
    assign_name_columns(&mut record, "7", &names);

    assert_eq!(record.part_name_english, "EN");
    assert_eq!(record.part_name_language_1, "L1");
    assert_eq!(record.part_name_language_2, "L2");
    assert_eq!(record.part_name_language_3, "L3");
    assert_eq!(record.part_name_language_4, "L4");
    assert_eq!(record.part_name_language_5, "L5");
}

#[test]
fn test_interleaved_mapping_for_serial_20() {
    let names = tokens(&["B", "A", "D", "X", "C", "Y"]);
    let mut record = CatalogRecord::default();
    assign_name_columns(&mut record, "20", &names);

    assert_eq!(record.part_name_language_2, "B");
    assert_eq!(record.part_name_english, "A");
    assert_eq!(record.part_name_language_4, "D");
    assert_eq!(record.part_name_language_1, "X");
    assert_eq!(record.part_name_language_3, "C");
    assert_eq!(record.part_name_language_5, "Y");
}

#[test]
fn test_names_beyond_six_slots_are_dropped() {
    let names = tokens(&["EN", "L1", "L2", "L3", "L4", "L5", "SEVENTH", "EIGHTH"]);

    let mut sequential = CatalogRecord::default();
    assign_name_columns(&mut sequential, "7", &names);
    let mut interleaved = CatalogRecord::default();
    assign_name_columns(&mut interleaved, "20", &names);

    for record in [&sequential, &interleaved] {
        for &column in columns::ALL {
            assert_ne!(record.get(column), Some("SEVENTH"));
            assert_ne!(record.get(column), Some("EIGHTH"));
        }
    }
}

#[test]
fn test_short_run_leaves_remaining_slots_empty() {
    let names = tokens(&["EN", "L1"]);
    let mut record = CatalogRecord::default();
    assign_name_columns(&mut record, "7", &names);

    assert_eq!(record.part_name_english, "EN");
    assert_eq!(record.part_name_language_1, "L1");
    assert_eq!(record.part_name_language_2, "");
    assert_eq!(record.part_name_language_5, "");
}
