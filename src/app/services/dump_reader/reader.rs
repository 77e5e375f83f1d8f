//! File reading and byte-level tokenization for catalog dumps

use std::path::Path;
use tracing::{debug, info};

use super::stats::{ReadResult, ReadStats};
use crate::constants::DUMP_FIELD_DELIMITER;
use crate::{Error, Result};

/// Read a catalog dump file and decode it into an ordered token sequence
pub fn read_dump(path: &Path) -> Result<ReadResult> {
    info!("Reading catalog dump: {}", path.display());

    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read dump file {}", path.display()), e))?;

    let result = tokenize(&bytes);
    info!(
        "Decoded {} tokens from {} segments ({} bytes)",
        result.tokens.len(),
        result.stats.segments_total,
        result.stats.bytes_read
    );

    Ok(result)
}

/// Split a dump byte buffer into decoded, trimmed, non-empty tokens
///
/// Segments are delimited by single null bytes. Each segment is decoded as
/// Latin-1, which maps every byte to a character and cannot fail. Segments
/// that are empty, or whitespace-only after decoding, produce no token.
pub fn tokenize(bytes: &[u8]) -> ReadResult {
    let mut stats = ReadStats {
        bytes_read: bytes.len(),
        ..Default::default()
    };
    let mut tokens = Vec::new();

    for segment in bytes.split(|b| *b == DUMP_FIELD_DELIMITER) {
        stats.segments_total += 1;

        if segment.is_empty() {
            stats.segments_empty += 1;
            continue;
        }

        let decoded = encoding_rs::mem::decode_latin1(segment);
        let trimmed = decoded.trim();
        if trimmed.is_empty() {
            stats.segments_empty += 1;
            continue;
        }

        tokens.push(trimmed.to_string());
    }

    stats.tokens_decoded = tokens.len();
    debug!(
        "Tokenized {} bytes: {} segments, {} empty, {} tokens",
        stats.bytes_read, stats.segments_total, stats.segments_empty, stats.tokens_decoded
    );

    ReadResult { tokens, stats }
}
