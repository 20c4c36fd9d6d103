//! Exit code constants for the acctprep CLI.
//!
//! - 0: Success
//! - 1: Usage or configuration error
//! - 2: File access failure (read, parse or write)
//! - 3: Schema failure (required column missing)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Input could not be read or parsed, or output could not be written.
pub const FILE_ACCESS_FAILURE: i32 = 2;

/// The input table is missing a column the formatter needs.
pub const SCHEMA_FAILURE: i32 = 3;
