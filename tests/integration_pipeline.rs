//! Integration tests for the full dump-to-CSV pipeline
//!
//! These tests drive the library end-to-end over temporary files: raw dump
//! bytes in, CSV table out, with the table read back for verification.

use catalog_processor::app::services::csv_writer::write_records;
use catalog_processor::app::services::dump_reader::read_dump;
use catalog_processor::app::services::record_extractor::RecordExtractor;
use catalog_processor::constants::columns;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write dump bytes into a temp file and return its path
fn write_dump(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(bytes).unwrap();
    path
}

/// Run the full pipeline: read, segment, extract, write
fn convert(input: &Path, output: &Path) -> usize {
    let read_result = read_dump(input).unwrap();
    let extractor = RecordExtractor::new().unwrap();
    let result = extractor.extract_all(&read_result.tokens);
    write_records(output, &result.records, false).unwrap();
    result.records.len()
}

/// Read every data row of a CSV table
fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .records()
        .map(|row| row.unwrap().iter().map(|f| f.to_string()).collect())
        .collect()
}

#[test]
fn test_single_entry_dump_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_dump(
        &temp_dir,
        "catalog.bin",
        b"20\x00B\x00A\x00D\x00X\x00C\x00Y\x0012345678\x00extra\x00",
    );
    let output = temp_dir.path().join("catalog.csv");

    let written = convert(&input, &output);
    assert_eq!(written, 1);

    let mut reader = csv::Reader::from_path(&output).unwrap();
    let headers: Vec<&str> = reader.headers().unwrap().iter().collect();
    assert_eq!(headers, columns::ALL.to_vec());

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        vec![
            "20",       // Serial Number
            "",         // Part Number
            "A",        // Part Name English
            "X",        // Part Name Language 1
            "B",        // Part Name Language 2
            "C",        // Part Name Language 3
            "D",        // Part Name Language 4
            "Y",        // Part Name Language 5
            "",         // Part Number in Other Format
            "12345678", // Reference Number
            "extra",    // Additional Information
            "-",        // Extra Data
        ]
    );
}

#[test]
fn test_multi_entry_dump_preserves_entry_order() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_dump(
        &temp_dir,
        "catalog.bin",
        b"ignored\x0020\x00NAME\x0012345678\x0061\x00CODE\x00NAME2\x0087654321\x00note\x00junk\x007\x00",
    );
    let output = temp_dir.path().join("catalog.csv");

    let written = convert(&input, &output);
    assert_eq!(written, 3);

    let rows = read_rows(&output);
    let serials: Vec<&str> = rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(serials, vec!["20", "61", "7"]);

    // The serial 61 entry drops the token after its additional information
    assert_eq!(rows[1][10], "note");
    assert_eq!(rows[1][11], "-");
    assert!(!rows[1].contains(&"junk".to_string()));

    // The serial-only entry carries nothing but its serial number
    assert_eq!(rows[2][0], "7");
    assert!(rows[2][1..].iter().all(|field| field.is_empty()));
}

#[test]
fn test_dump_without_boundaries_produces_no_records() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_dump(&temp_dir, "catalog.bin", b"WIDGET\x00BRACKET\x001000\x00");

    let read_result = read_dump(&input).unwrap();
    let extractor = RecordExtractor::new().unwrap();
    let result = extractor.extract_all(&read_result.tokens);

    assert!(result.records.is_empty());
    assert_eq!(result.stats.tokens_skipped, 3);
}

#[test]
fn test_latin1_names_survive_the_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    // "CHARNI\xC8RE" is CHARNIÈRE in Latin-1
    let input = write_dump(
        &temp_dir,
        "catalog.bin",
        b"7\x00CODE\x00HINGE\x00CHARNI\xC8RE\x0012345678\x00",
    );
    let output = temp_dir.path().join("catalog.csv");

    convert(&input, &output);

    let rows = read_rows(&output);
    assert_eq!(rows[0][2], "HINGE");
    assert_eq!(rows[0][3], "CHARNI\u{C8}RE");
}

#[test]
fn test_conversion_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_dump(
        &temp_dir,
        "catalog.bin",
        b"20\x00B\x00A\x00D\x00X\x00C\x00Y\x0012345678\x00extra\x0061\x00CODE\x00NAME\x00",
    );

    let first_output = temp_dir.path().join("first.csv");
    let second_output = temp_dir.path().join("second.csv");
    convert(&input, &first_output);
    convert(&input, &second_output);

    let first = std::fs::read(&first_output).unwrap();
    let second = std::fs::read(&second_output).unwrap();
    assert_eq!(first, second);
}
