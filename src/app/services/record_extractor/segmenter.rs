//! Chunk segmentation for catalog token sequences
//!
//! A token opens a new entry iff it is a serial token. Each chunk spans from
//! its serial token up to the next serial token or the end of the sequence,
//! so the chunks partition every token after the first boundary. Tokens
//! before the first serial token belong to no entry and are dropped.

use tracing::{debug, warn};

use super::patterns::TokenPatterns;
use crate::app::models::Chunk;

/// Chunks recovered from a token sequence
#[derive(Debug, Clone, Default)]
pub struct Segmentation<'a> {
    /// Chunks in token order
    pub chunks: Vec<Chunk<'a>>,
    /// Tokens before the first serial token (all tokens when no entry opens)
    pub skipped_prefix_tokens: usize,
}

/// Split a token sequence into per-entry chunks at serial tokens
pub fn segment_tokens<'a>(tokens: &'a [String], patterns: &TokenPatterns) -> Segmentation<'a> {
    let starts: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| patterns.is_chunk_start(token))
        .map(|(index, _)| index)
        .collect();

    if starts.is_empty() {
        if !tokens.is_empty() {
            warn!(
                "No serial token found in {} tokens, no entries produced",
                tokens.len()
            );
        }
        return Segmentation {
            chunks: Vec::new(),
            skipped_prefix_tokens: tokens.len(),
        };
    }

    let mut chunks = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(tokens.len());
        chunks.push(Chunk::new(&tokens[start..end]));
    }

    let skipped_prefix_tokens = starts[0];
    if skipped_prefix_tokens > 0 {
        warn!(
            "Dropped {} tokens before the first serial token",
            skipped_prefix_tokens
        );
    }

    debug!("Segmented {} tokens into {} chunks", tokens.len(), chunks.len());

    Segmentation {
        chunks,
        skipped_prefix_tokens,
    }
}
