//! Error types for the acctprep CLI.
//!
//! Uses thiserror for derive macros. Messages carry the offending path and the
//! underlying cause so the operator can act on them directly.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for acctprep operations.
#[derive(Error, Debug)]
pub enum PrepError {
    /// Invalid arguments or configuration values.
    #[error("{0}")]
    ConfigError(String),

    /// Input file missing, unreadable, or not parseable as a table.
    #[error("Read failed: {0}")]
    ReadError(String),

    /// Output file could not be written.
    #[error("Write failed: {0}")]
    WriteError(String),

    /// Input table lacks a required column.
    #[error("Schema error: {0}")]
    SchemaError(String),
}

impl PrepError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrepError::ConfigError(_) => exit_codes::USER_ERROR,
            PrepError::ReadError(_) => exit_codes::FILE_ACCESS_FAILURE,
            PrepError::WriteError(_) => exit_codes::FILE_ACCESS_FAILURE,
            PrepError::SchemaError(_) => exit_codes::SCHEMA_FAILURE,
        }
    }
}

/// Result type alias for acctprep operations.
pub type Result<T> = std::result::Result<T, PrepError>;
