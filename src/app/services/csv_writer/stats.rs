//! Write statistics for the CSV writer

/// Statistics from one table write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteStats {
    /// Data rows written, header excluded
    pub records_written: usize,
    /// Size of the written file in bytes
    pub bytes_written: u64,
}
