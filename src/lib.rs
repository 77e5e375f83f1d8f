//! Catalog Processor Library
//!
//! A Rust library for converting null-delimited part-catalog dumps into
//! structured CSV tables.
//!
//! This library provides tools for:
//! - Reading null-delimited Latin-1 dump files into token sequences
//! - Segmenting token sequences into per-entry chunks at serial-number tokens
//! - Classifying tokens into part number, alternate-format part number and
//!   reference number roles by value shape
//! - Mapping variable-length localized name runs onto fixed output columns
//! - Writing fixed-schema CSV tables with standard quoting
//! - Comprehensive error handling

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_writer;
        pub mod dump_reader;
        pub mod record_extractor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CatalogRecord, PatternLabel};
pub use config::Config;

/// Result type alias for the catalog processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for catalog processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Pattern compilation error
    #[error("Pattern compilation error for '{pattern}': {message}")]
    PatternCompilation { pattern: String, message: String },

    /// CSV writing error
    #[error("CSV writing error for file '{file}': {message}")]
    CsvWriting {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::other(message_str),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a pattern compilation error
    pub fn pattern_compilation(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PatternCompilation {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create a CSV writing error with context
    pub fn csv_writing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvWriting {
            file: file.into(),
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvWriting {
            file: "unknown".to_string(),
            message: "CSV writing failed".to_string(),
            source: Some(error),
        }
    }
}
