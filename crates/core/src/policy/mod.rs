//! Page Replacement Policies.
//!
//! Implements the algorithms for selecting victim frames when a fault occurs
//! with every frame occupied.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//! - `Random`: Uniform random selection after the fill phase.
//! - `Optimal`: Belady's clairvoyant algorithm (furthest future use).
//!
//! All four share the same fill-phase behavior: while the frame table still
//! has never-used slots, the victim is the next empty slot in frame order, so
//! the policies only diverge once the table is full.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Amortized future-position index for the Optimal policy.
pub mod future;

/// Least Recently Used replacement policy.
pub mod lru;

/// Optimal (Belady) replacement policy.
pub mod optimal;

/// Random replacement policy.
pub mod random;

pub use fifo::FifoPolicy;
pub use future::TraceFutureIndex;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;
pub use random::RandomPolicy;

use crate::common::Page;
use crate::sim::FrameTable;

/// Trait for page replacement policies.
///
/// Defines the interface for recording accesses and selecting victim frames.
/// The simulator owns the frame table; policies read it but never mutate it —
/// the caller performs the install.
pub trait ReplacementPolicy {
    /// Records that `page` was accessed and is now resident in `frame`.
    ///
    /// Called by the simulator after **every** access — on a hit, and on a
    /// miss once the new page has been installed. Policies use this to
    /// maintain recency order (LRU) or the trace position counter (Optimal);
    /// FIFO and Random ignore it.
    fn record_access(&mut self, page: Page, frame: usize);

    /// Selects a victim frame for the page about to be installed.
    ///
    /// Called **only** on a miss, before the install. Must return an index in
    /// `[0, num_frames)`. While the table still has never-used slots, every
    /// policy returns the next empty slot in frame order.
    fn choose_victim(&mut self, frames: &FrameTable) -> usize;
}
