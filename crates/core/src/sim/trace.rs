//! Trace loading and page-number derivation.
//!
//! An access trace is a text file with one decimal address per line. Loading
//! performs the external page-number derivation: raw address divided by the
//! page size, integer division. The policies never see raw addresses.

use std::fs;
use std::path::Path;

use crate::common::{Page, SimError};

/// Parses trace text into the ordered page sequence.
///
/// Each non-blank line is a decimal address; surrounding whitespace is
/// ignored. Pages are derived as `address / page_size`.
///
/// # Errors
///
/// Returns [`SimError::InvalidPageSize`] if `page_size` is zero, and
/// [`SimError::TraceParse`] (carrying the 1-based line number) for a line
/// that does not parse as a decimal address.
pub fn parse_trace(text: &str, page_size: u64) -> Result<Vec<Page>, SimError> {
    if page_size == 0 {
        return Err(SimError::InvalidPageSize);
    }
    let mut trace = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let addr: u64 = line
            .parse()
            .map_err(|source| SimError::TraceParse {
                line: idx + 1,
                source,
            })?;
        trace.push(Page::containing(addr, page_size));
    }
    Ok(trace)
}

/// Reads and parses the trace file at `path`.
///
/// # Errors
///
/// Returns [`SimError::TraceIo`] if the file cannot be read, plus any error
/// from [`parse_trace`].
pub fn load_trace(path: &Path, page_size: u64) -> Result<Vec<Page>, SimError> {
    let text = fs::read_to_string(path)?;
    parse_trace(&text, page_size)
}
