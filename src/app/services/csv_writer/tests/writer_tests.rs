//! Tests for CSV file creation and record serialization

use crate::app::models::CatalogRecord;
use crate::app::services::csv_writer::write_records;
use crate::constants::columns;
use tempfile::TempDir;

fn sample_record(serial: &str) -> CatalogRecord {
    let mut record = CatalogRecord::with_serial(serial);
    record.set(columns::PART_NAME_ENGLISH, "BRACKET".to_string());
    record.set(columns::REFERENCE_NUMBER, "12345678".to_string());
    record.set(columns::EXTRA_DATA, "-".to_string());
    record
}

#[test]
fn test_writes_header_and_rows_in_declared_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.csv");

    let records = vec![sample_record("20"), sample_record("61")];
    let stats = write_records(&path, &records, false).unwrap();

    assert_eq!(stats.records_written, 2);
    assert!(stats.bytes_written > 0);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    let expected: Vec<&str> = columns::ALL.to_vec();
    assert_eq!(headers.iter().collect::<Vec<_>>(), expected);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "20");
    assert_eq!(&rows[0][2], "BRACKET");
    assert_eq!(&rows[1][0], "61");
}

#[test]
fn test_fields_with_delimiters_are_quoted() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.csv");

    let mut record = sample_record("7");
    record.set(
        columns::ADDITIONAL_INFORMATION,
        "BOLT, HEX \"M8\"".to_string(),
    );
    write_records(&path, &[record], false).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"BOLT, HEX \"\"M8\"\"\""));

    // Reading back restores the original field value
    let mut reader = csv::Reader::from_path(&path).unwrap();
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[10], "BOLT, HEX \"M8\"");
}

#[test]
fn test_creates_missing_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("deep").join("catalog.csv");

    write_records(&path, &[sample_record("7")], false).unwrap();
    assert!(path.exists());
}

#[test]
fn test_refuses_to_overwrite_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.csv");

    write_records(&path, &[sample_record("7")], false).unwrap();
    let result = write_records(&path, &[sample_record("8")], false);
    assert!(matches!(result, Err(crate::Error::Configuration { .. })));

    // The original table is untouched
    let mut reader = csv::Reader::from_path(&path).unwrap();
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[0], "7");
}

#[test]
fn test_force_overwrite_replaces_existing_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.csv");

    write_records(&path, &[sample_record("7")], false).unwrap();
    write_records(&path, &[sample_record("8")], true).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[0], "8");
}

#[test]
fn test_empty_record_list_writes_header_only() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.csv");

    let stats = write_records(&path, &[], false).unwrap();
    assert_eq!(stats.records_written, 0);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(reader.headers().unwrap().len(), columns::ALL.len());
    assert_eq!(reader.records().count(), 0);
}
