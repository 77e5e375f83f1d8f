//! Read statistics and result structures for the dump reader

/// Statistics collected while tokenizing a dump
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Total bytes read from the dump file
    pub bytes_read: usize,
    /// Null-delimited segments seen, including empty ones
    pub segments_total: usize,
    /// Segments dropped for being empty or whitespace-only
    pub segments_empty: usize,
    /// Tokens produced after decoding and trimming
    pub tokens_decoded: usize,
}

/// Tokens and statistics produced from one dump file
#[derive(Debug, Clone, Default)]
pub struct ReadResult {
    /// Decoded tokens in dump order
    pub tokens: Vec<String>,
    /// Read statistics
    pub stats: ReadStats,
}
