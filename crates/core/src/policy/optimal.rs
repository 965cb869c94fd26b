//! Optimal (Belady) Replacement Policy.
//!
//! The clairvoyant offline policy: on each eviction, every resident page is
//! scored by the position of its next use strictly after the current trace
//! position, and the page whose next use lies furthest in the future is
//! evicted (a page never used again scores as infinity). Ties are broken by
//! the lowest frame index for determinism. This is the provably fault-minimal
//! policy for a given trace and frame count, and serves as the correctness
//! oracle the online policies must never beat.
//!
//! Next-use queries go through [`TraceFutureIndex`] rather than re-scanning
//! the remaining trace, so the whole replay stays amortized O(1) per access.
//! The trace is owned here as constructor state — there is no ambient global
//! trace.

use super::future::{NO_FUTURE_USE, TraceFutureIndex};
use super::ReplacementPolicy;
use crate::common::Page;
use crate::sim::FrameTable;

/// Optimal policy state.
pub struct OptimalPolicy {
    /// Future occurrence queues, drained as replay advances.
    future: TraceFutureIndex,
    /// Position of the access currently being processed (an access index
    /// into the trace, advanced on every access — hits included).
    position: usize,
    /// Next never-used slot while the table is still filling.
    fill_next: usize,
    /// Number of frames in the table.
    num_frames: usize,
}

impl OptimalPolicy {
    /// Creates a new Optimal policy for `num_frames` frames.
    ///
    /// `trace` must be the complete, ordered page sequence that will later be
    /// replayed; supplying a different or shorter trace at replay time
    /// produces undefined victim choices.
    pub fn new(num_frames: usize, trace: &[Page]) -> Self {
        Self {
            future: TraceFutureIndex::build(trace),
            position: 0,
            fill_next: 0,
            num_frames,
        }
    }
}

impl ReplacementPolicy for OptimalPolicy {
    /// Advances the trace position counter.
    ///
    /// The counter is an access index, not a miss index: hits advance it
    /// too, keeping the future queues aligned with the positions recorded
    /// at construction.
    fn record_access(&mut self, _page: Page, _frame: usize) {
        self.position += 1;
    }

    /// Returns the next empty slot during fill, then the frame whose page
    /// recurs furthest in the future.
    ///
    /// # Panics
    ///
    /// Panics if called with a vacant frame after the fill phase has ended;
    /// that indicates simulator bookkeeping out of sync with this policy.
    fn choose_victim(&mut self, frames: &FrameTable) -> usize {
        if self.fill_next < self.num_frames {
            let slot = self.fill_next;
            self.fill_next += 1;
            return slot;
        }

        let mut victim = 0;
        let mut farthest = 0;
        for (frame, slot) in frames.contents().iter().enumerate() {
            let page = slot.expect("vacant frame after the fill phase");
            let next = self.future.next_use_after(page, self.position);
            // Strict comparison: ties keep the lowest frame index.
            if next > farthest {
                farthest = next;
                victim = frame;
            }
            if next == NO_FUTURE_USE {
                break;
            }
        }
        victim
    }
}
