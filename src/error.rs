//! Error types for the settlement engine.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Format errors detected while scanning a candidate input file.
///
/// Each variant corresponds to one rejection class; the line number is
/// 1-based and points at the offending line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A line before the terminator is empty or all-whitespace
    #[error("file is empty or incorrectly formatted (line {line})")]
    BlankLine { line: usize },

    /// A line parses as an integer but is negative
    #[error("file contains negative integers (line {line})")]
    NegativeInteger { line: usize },

    /// A line parses as a decimal but is negative
    #[error("file contains negative numbers (line {line})")]
    NegativeNumber { line: usize },

    /// A line is neither an integer nor a decimal
    #[error("file contains non-numeric data (line {line})")]
    NonNumeric { line: usize },

    /// The input ended before a literal "0" terminator line was seen
    #[error("file ends before the terminating \"0\" line")]
    MissingTerminator,
}

/// Errors that can occur during engine operation.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Failed to open, read, or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input failed validation
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),

    /// The input passed validation but does not follow the record grammar
    #[error("malformed record at line {line}: {message}")]
    Malformed { line: usize, message: String },

    /// Standard input closed before a usable file name was entered
    #[error("no file name provided on standard input")]
    NoInput,
}
