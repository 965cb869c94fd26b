//! Error taxonomy for the page replacement simulator.
//!
//! This module defines the recoverable failure classes reported to callers:
//! 1. **Configuration Errors:** Invalid frame counts or page sizes, and an
//!    Optimal pager constructed without its trace — fatal at construction.
//! 2. **Unsupported Policy:** An algorithm name with no implementation behind
//!    it, rejected at parse time rather than deferred to the first eviction.
//! 3. **Trace Errors:** I/O and parse failures while loading an access trace.
//!
//! Programming errors — a policy returning an out-of-range victim, an install
//! at an out-of-range frame — are not represented here. They indicate a bug in
//! the policy layer and abort via `assert!` instead of being swallowed.

use thiserror::Error;

use crate::config::PolicyKind;

/// Errors reported by simulator construction and trace loading.
///
/// Every operation in this crate is deterministic pure computation (the
/// Random policy aside), so none of these failures is transient: there is
/// nothing to retry, and nothing is recoverable mid-trace except by
/// restarting the simulation with corrected configuration.
#[derive(Debug, Error)]
pub enum SimError {
    /// The configured frame count was zero. A frame table needs at least one
    /// slot; defaulting silently would mask the misconfiguration.
    #[error("invalid frame count 0: a pager needs at least one frame")]
    InvalidFrameCount,

    /// The configured page size was zero, which would make the page-number
    /// derivation divide by zero.
    #[error("invalid page size 0: page size must be at least 1")]
    InvalidPageSize,

    /// The Optimal policy was selected without supplying the access trace it
    /// needs for lookahead.
    #[error("policy {0} requires the complete access trace at construction")]
    MissingTrace(PolicyKind),

    /// An algorithm name that names no registered policy implementation.
    #[error("unsupported replacement policy {0:?} (expected FIFO, LRU, Random, or OPT)")]
    UnsupportedPolicy(String),

    /// A trace line that did not parse as a decimal address.
    #[error("trace line {line}: invalid address: {source}")]
    TraceParse {
        /// 1-based line number of the offending entry.
        line: usize,
        /// The underlying integer parse failure.
        #[source]
        source: std::num::ParseIntError,
    },

    /// The trace file could not be read.
    #[error("failed to read trace: {0}")]
    TraceIo(#[from] std::io::Error),
}
