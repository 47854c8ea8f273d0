//! Line-scan validation of candidate input files.
//!
//! The scan runs before any settlement arithmetic and rejects a file on the
//! first offending line. It reads the in-memory line list, so the same data
//! can be parsed afterwards without reopening the source.

use crate::error::ValidationError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// The literal line that ends the input stream.
///
/// Compared exactly, without trimming: a line such as `" 0"` is an ordinary
/// numeric line, not a terminator.
pub const TERMINATOR: &str = "0";

/// Scans lines until the terminator, rejecting the file on the first
/// blank, negative, or non-numeric line.
///
/// Reaching the end of input without seeing the terminator is also a
/// rejection, since downstream parsing cannot assume a well-formed trip
/// list. Lines after the terminator are not inspected.
pub fn scan<'a, I>(lines: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    for (idx, line) in lines.into_iter().enumerate() {
        if line == TERMINATOR {
            return Ok(());
        }
        check_line(line, idx + 1)?;
    }
    Err(ValidationError::MissingTerminator)
}

/// Classifies a single pre-terminator line.
///
/// Integer parse is attempted first, matching the count-then-amount record
/// grammar; a value that fails both parses is non-numeric.
fn check_line(line: &str, line_no: usize) -> Result<(), ValidationError> {
    let token = line.trim();
    if token.is_empty() {
        return Err(ValidationError::BlankLine { line: line_no });
    }

    if let Ok(value) = token.parse::<i64>() {
        if value < 0 {
            return Err(ValidationError::NegativeInteger { line: line_no });
        }
        return Ok(());
    }

    match Decimal::from_str(token) {
        Ok(value) if value < Decimal::ZERO => {
            Err(ValidationError::NegativeNumber { line: line_no })
        }
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::NonNumeric { line: line_no }),
    }
}
