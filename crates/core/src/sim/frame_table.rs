//! Fixed-capacity frame table.
//!
//! The ownership root for all physical frames. Each slot holds the page
//! currently resident in that frame, or nothing if the frame has never been
//! written. Capacity decisions live entirely in the policy layer: the table
//! only answers residency queries and performs installs.

use crate::common::Page;

/// An ordered sequence of frame slots, fixed at construction.
///
/// Invariants: at most one frame holds any given page at a time, and exactly
/// the frames that have ever been written are occupied — the rest stay empty
/// until the table fills.
pub struct FrameTable {
    frames: Vec<Option<Page>>,
}

impl FrameTable {
    /// Creates a table of `num_frames` empty frames.
    pub fn new(num_frames: usize) -> Self {
        Self {
            frames: vec![None; num_frames],
        }
    }

    /// Number of frames in the table. Never changes after construction.
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    /// Returns the frame currently holding `page`, if any.
    ///
    /// Linear scan: frame counts are small in practice, and the table stays
    /// the single source of truth for residency.
    pub fn lookup(&self, page: Page) -> Option<usize> {
        self.frames.iter().position(|&slot| slot == Some(page))
    }

    /// Returns the page resident in `frame`, or `None` for an empty slot.
    ///
    /// # Panics
    ///
    /// Panics if `frame` is out of range.
    pub fn get(&self, frame: usize) -> Option<Page> {
        self.frames[frame]
    }

    /// Installs `page` into `frame`, overwriting the slot unconditionally.
    ///
    /// # Panics
    ///
    /// Panics if `frame` is out of range — an out-of-range install is a bug
    /// in the policy layer, not a recoverable error. Debug builds also check
    /// that `page` is not already resident in another frame.
    pub fn install(&mut self, frame: usize, page: Page) {
        assert!(
            frame < self.frames.len(),
            "install at frame {frame} out of range (num_frames = {})",
            self.frames.len()
        );
        debug_assert!(
            self.lookup(page).is_none(),
            "page {page} already resident while installing into frame {frame}"
        );
        self.frames[frame] = Some(page);
    }

    /// True once every frame holds a page.
    pub fn is_full(&self) -> bool {
        self.frames.iter().all(Option::is_some)
    }

    /// The frame contents in frame order, for verification and debugging.
    pub fn contents(&self) -> &[Option<Page>] {
        &self.frames
    }
}
