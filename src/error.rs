//! Error types for quickscope.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from address parsing and range construction.
#[derive(Error, Debug)]
pub enum RangeError {
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: String, end: String },

    #[error("mixed address families: {start} and {end}")]
    MixedFamilies { start: String, end: String },
}

/// Result type alias for range operations.
pub type RangeResult<T> = Result<T, RangeError>;

/// Top-level error type for a CLI run.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
