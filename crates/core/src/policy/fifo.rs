//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the page that has been resident longest, regardless of
//! how recently it was accessed. It operates as a circular pointer over the
//! frame table: each eviction returns the current pointer and advances it by
//! one, wrapping modulo the frame count. During the initial fill the same
//! pointer walk doubles as the next-empty-slot cursor, so fill order equals
//! eviction order.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `record_access()`: O(1) (no-op)
//!   - `choose_victim()`: O(1)
//! - **Space Complexity:** O(1) — a single pointer
//! - **Best Case:** Streaming accesses where all pages have equal importance
//! - **Worst Case:** Cyclic patterns one page wider than the frame count
//!   (never stabilizes; see Belady's anomaly)

use super::ReplacementPolicy;
use crate::common::Page;
use crate::sim::FrameTable;

/// FIFO policy state.
pub struct FifoPolicy {
    /// Next frame to be evicted (and, during fill, next slot to populate).
    head: usize,
    /// Number of frames in the table.
    num_frames: usize,
}

impl FifoPolicy {
    /// Creates a new FIFO policy for a table of `num_frames` frames.
    pub fn new(num_frames: usize) -> Self {
        Self {
            head: 0,
            num_frames,
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    /// FIFO ignores accesses: residency age, not recency, decides eviction.
    fn record_access(&mut self, _page: Page, _frame: usize) {}

    /// Returns the current pointer and advances it modulo the frame count.
    ///
    /// The wrap must be a modulo assignment, not a comparison: a pointer
    /// that fails to wrap would evict frame 0 forever after the first lap.
    fn choose_victim(&mut self, _frames: &FrameTable) -> usize {
        let victim = self.head;
        self.head = (self.head + 1) % self.num_frames;
        victim
    }
}
