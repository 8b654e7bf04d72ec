//! Branch trace parsing.
//!
//! A trace is plain text with one resolved branch per line: the branch
//! address in hexadecimal (the `0x` prefix is optional) followed by the
//! outcome, `1` for taken and `0` for not taken. Blank lines are skipped.
//!
//! ```text
//! 0x40c4d0 1
//! 0x40c4e8 0
//! ```

use std::io::BufRead;

use bpred_core::{Direction, sim::BranchRecord};
use thiserror::Error;

/// Errors raised while reading a trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The underlying reader failed.
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not contain an address and an outcome.
    #[error("line {line}: expected '<hex address> <0|1>', found '{text}'")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// Offending line contents.
        text: String,
    },

    /// The address field was not a 32-bit hexadecimal number.
    #[error("line {line}: invalid branch address '{text}'")]
    BadAddress {
        /// 1-based line number.
        line: usize,
        /// Offending field.
        text: String,
    },

    /// The outcome field was neither `0` nor `1`.
    #[error("line {line}: invalid outcome '{text}' (expected 0 or 1)")]
    BadOutcome {
        /// 1-based line number.
        line: usize,
        /// Offending field.
        text: String,
    },
}

/// Parses a single trace line. Returns `Ok(None)` for blank lines.
///
/// # Errors
///
/// Returns a [`TraceError`] describing the first malformed field.
pub fn parse_line(line: usize, text: &str) -> Result<Option<BranchRecord>, TraceError> {
    let mut fields = text.split_whitespace();
    let Some(addr) = fields.next() else {
        return Ok(None);
    };
    let (Some(outcome), None) = (fields.next(), fields.next()) else {
        return Err(TraceError::Malformed {
            line,
            text: text.to_owned(),
        });
    };

    let digits = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr);
    let address = u32::from_str_radix(digits, 16).map_err(|_| TraceError::BadAddress {
        line,
        text: addr.to_owned(),
    })?;

    let outcome = match outcome {
        "1" => Direction::Taken,
        "0" => Direction::NotTaken,
        _ => {
            return Err(TraceError::BadOutcome {
                line,
                text: outcome.to_owned(),
            });
        }
    };

    Ok(Some(BranchRecord::new(address, outcome)))
}

/// Iterates over the branch records of a trace, stopping at the first error.
pub fn records<R: BufRead>(reader: R) -> impl Iterator<Item = Result<BranchRecord, TraceError>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(text) => parse_line(idx + 1, &text).transpose(),
            Err(err) => Some(Err(TraceError::Io(err))),
        })
}
