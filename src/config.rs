//! Configuration management and validation.
//!
//! Provides layered configuration for the catalog processor: built-in
//! defaults, an optional TOML config file, then command-line overrides.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Complete configuration for a processing run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input, output and overwrite settings
    pub processing: ProcessingConfig,
    /// Logging verbosity and format settings
    pub logging: LoggingConfig,
}

/// Processing paths and behavior flags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Path to the null-delimited dump file to read
    pub input_path: PathBuf,

    /// Path of the CSV table to write
    pub output_path: PathBuf,

    /// Segment and classify without writing any output
    pub dry_run: bool,

    /// Overwrite the output file if it already exists
    pub force_overwrite: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            dry_run: false,
            force_overwrite: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error
    pub level: String,

    /// Emit timestamped structured output instead of compact output
    pub structured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            structured: true,
        }
    }
}

impl Config {
    /// Default config file location under the user config directory
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file '{}': {}", path.display(), e))
        })
    }

    /// Load configuration using the layered approach (defaults -> file -> paths)
    ///
    /// Explicit input/output paths take precedence over both the config file
    /// and the built-in defaults.
    pub fn load_layered(
        input_path: Option<PathBuf>,
        output_path: Option<PathBuf>,
        config_file: Option<&Path>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(input) = input_path {
            config.processing.input_path = input;
        }
        if let Some(output) = output_path {
            config.processing.output_path = output;
        }

        debug!(
            "Configuration resolved: input={}, output={}",
            config.processing.input_path.display(),
            config.processing.output_path.display()
        );

        Ok(config)
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.processing.output_path.file_name().is_none() {
            return Err(Error::configuration(format!(
                "Output path '{}' has no file name",
                self.processing.output_path.display()
            )));
        }

        const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}' (expected one of {})",
                self.logging.level,
                LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Create the output directory if it does not exist
    pub fn ensure_output_directory(&self) -> Result<()> {
        if let Some(parent) = self.processing.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::configuration(format!(
                        "Failed to create output directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        Ok(())
    }
}
