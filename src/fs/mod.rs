//! Filesystem utilities for acctprep.
//!
//! Output tables are always written through [`atomic_write`] so a failed run
//! never leaves a truncated file at the destination path.

pub mod atomic;

pub use atomic::atomic_write;
