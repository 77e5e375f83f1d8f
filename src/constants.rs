//! Application constants for catalog processor
//!
//! This module contains the shape patterns, output schema, special serial
//! values and default settings used throughout the catalog processor
//! application.

// =============================================================================
// Token Shape Patterns
// =============================================================================

/// Primary part number: 12-13 uppercase alphanumerics containing a digit
pub const PART_NUMBER_PATTERN: &str = r"^(?=.*\d)[A-Z0-9]{12,13}$";

/// Alternate-format part number: 15-16 characters with a digit and a dot
pub const OTHER_FORMAT_PART_NUMBER_PATTERN: &str = r"^(?=.*\d)(?=.*\.)([A-Z0-9.]{15,16})$";

/// Reference number: exactly eight decimal digits
pub const REFERENCE_NUMBER_PATTERN: &str = r"^[0-9]{8}$";

/// Serial token opening a new catalog entry: decimal digits, fewer than four
pub const SERIAL_TOKEN_PATTERN: &str = r"^[0-9]{1,3}$";

// =============================================================================
// Special Serial Values
// =============================================================================

/// Serial number whose entries carry their localized names in an interleaved
/// slot order instead of the declared column order
pub const SERIAL_INTERLEAVED_NAMES: &str = "20";

/// Serial number whose entries discard every token after the additional
/// information field
pub const SERIAL_TRUNCATED_TAIL: &str = "61";

// =============================================================================
// Dump File Format
// =============================================================================

/// Field delimiter in catalog dump files
pub const DUMP_FIELD_DELIMITER: u8 = 0x00;

// =============================================================================
// Output Schema
// =============================================================================

/// Number of localized name slots per record
pub const NAME_SLOT_COUNT: usize = 6;

/// Separator joining leftover trailing tokens into the extra data field
pub const EXTRA_DATA_SEPARATOR: &str = "___";

/// Placeholder written when an entry has no leftover trailing tokens
pub const EXTRA_DATA_PLACEHOLDER: &str = "-";

/// Output column names in declared order
pub mod columns {
    pub const SERIAL_NUMBER: &str = "Serial Number";
    pub const PART_NUMBER: &str = "Part Number";
    pub const PART_NAME_ENGLISH: &str = "Part Name English";
    pub const PART_NAME_LANGUAGE_1: &str = "Part Name Language 1";
    pub const PART_NAME_LANGUAGE_2: &str = "Part Name Language 2";
    pub const PART_NAME_LANGUAGE_3: &str = "Part Name Language 3";
    pub const PART_NAME_LANGUAGE_4: &str = "Part Name Language 4";
    pub const PART_NAME_LANGUAGE_5: &str = "Part Name Language 5";
    pub const PART_NUMBER_OTHER_FORMAT: &str = "Part Number in Other Format";
    pub const REFERENCE_NUMBER: &str = "Reference Number";
    pub const ADDITIONAL_INFORMATION: &str = "Additional Information";
    pub const EXTRA_DATA: &str = "Extra Data";

    /// All output columns in declared order
    pub const ALL: &[&str] = &[
        SERIAL_NUMBER,
        PART_NUMBER,
        PART_NAME_ENGLISH,
        PART_NAME_LANGUAGE_1,
        PART_NAME_LANGUAGE_2,
        PART_NAME_LANGUAGE_3,
        PART_NAME_LANGUAGE_4,
        PART_NAME_LANGUAGE_5,
        PART_NUMBER_OTHER_FORMAT,
        REFERENCE_NUMBER,
        ADDITIONAL_INFORMATION,
        EXTRA_DATA,
    ];
}

/// Localized name columns in declared order
pub const SEQUENTIAL_NAME_COLUMNS: &[&str] = &[
    columns::PART_NAME_ENGLISH,
    columns::PART_NAME_LANGUAGE_1,
    columns::PART_NAME_LANGUAGE_2,
    columns::PART_NAME_LANGUAGE_3,
    columns::PART_NAME_LANGUAGE_4,
    columns::PART_NAME_LANGUAGE_5,
];

/// Name columns in the interleaved order used by serial 20 entries,
/// indexed by position within the name span
pub const INTERLEAVED_NAME_COLUMNS: &[&str] = &[
    columns::PART_NAME_LANGUAGE_2,
    columns::PART_NAME_ENGLISH,
    columns::PART_NAME_LANGUAGE_4,
    columns::PART_NAME_LANGUAGE_1,
    columns::PART_NAME_LANGUAGE_3,
    columns::PART_NAME_LANGUAGE_5,
];

// =============================================================================
// Default Paths
// =============================================================================

/// Default input dump file path
pub const DEFAULT_INPUT_FILE: &str = "source/Input_File_01.txt";

/// Default output CSV file path
pub const DEFAULT_OUTPUT_FILE: &str = "output/catalog.csv";

/// Default config file directory name under the user config directory
pub const CONFIG_DIR_NAME: &str = "catalog-processor";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Performance and Monitoring Constants
// =============================================================================

/// Progress reporting update interval (number of processed chunks)
pub const PROGRESS_UPDATE_INTERVAL: usize = 1000;

// =============================================================================
// Helper Functions
// =============================================================================

/// Name column for a span position under the declared column order
pub fn sequential_name_column(index: usize) -> Option<&'static str> {
    SEQUENTIAL_NAME_COLUMNS.get(index).copied()
}

/// Name column for a span position under the interleaved serial 20 order
pub fn interleaved_name_column(index: usize) -> Option<&'static str> {
    INTERLEAVED_NAME_COLUMNS.get(index).copied()
}
