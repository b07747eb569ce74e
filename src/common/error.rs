//! Error types for the console exercises
//!
//! Error messages are written for the person sitting at the terminal, so
//! they say what to type rather than what went wrong internally.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for both exercise programs
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    #[error("sequence length must be a positive integer (got {0})")]
    NonPositiveLength(i64),

    #[error("expected an integer, got '{0}'")]
    InvalidNumber(String),

    #[error("ran out of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an unexpected-EOF error naming what was being read
    pub fn eof(expected: &'static str) -> Self {
        Self::UnexpectedEof { expected }
    }
}
