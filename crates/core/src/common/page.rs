//! Page identifier type.
//!
//! This module defines a strong type for page numbers to prevent accidental
//! mixing of raw addresses and derived page identifiers. A page number carries
//! no semantic content beyond identity: it is compared, hashed, and ordered,
//! never dereferenced.

use std::fmt;

/// A virtual page number.
///
/// Page numbers are derived from raw addresses by dividing out the page size
/// (integer division). The simulator only ever compares pages for identity;
/// their ordering and hashing exist so policies can index private history by
/// page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(pub u64);

impl Page {
    /// Creates a page identifier from a raw page number.
    #[inline(always)]
    pub fn new(number: u64) -> Self {
        Self(number)
    }

    /// Returns the raw page number.
    #[inline(always)]
    pub fn val(&self) -> u64 {
        self.0
    }

    /// Derives the page containing `addr` for the given page size.
    ///
    /// This is the external page-number derivation performed by the trace
    /// loader: raw address divided by page size, integer division.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero. Callers validate page size before any
    /// derivation (see `SimConfig::validate`).
    #[inline]
    pub fn containing(addr: u64, page_size: u64) -> Self {
        assert!(page_size > 0, "page size must be at least 1");
        Self(addr / page_size)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
