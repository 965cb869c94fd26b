//! Access replay against a chosen replacement policy.
//!
//! The simulator owns the frame table, the policy state, and the counters,
//! and drives them one page reference at a time. Replay is strictly
//! sequential: each decision depends on the table state left by the previous
//! one, and nothing here is safe to call from multiple threads without
//! external synchronization — the frame table and policy state are mutated
//! without internal locking by design.

use tracing::{debug, trace};

use crate::common::{Page, SimError};
use crate::config::{PolicyKind, SimConfig};
use crate::policy::{FifoPolicy, LruPolicy, OptimalPolicy, RandomPolicy, ReplacementPolicy};
use crate::sim::FrameTable;
use crate::stats::SimStats;

/// Page replacement simulator.
///
/// Constructed for one policy and frame count, driven with [`access`], and
/// discarded after the final reference. The Optimal policy consumes its
/// future index during replay, so a second replay needs a fresh simulator.
///
/// [`access`]: PagingSimulator::access
pub struct PagingSimulator {
    frames: FrameTable,
    policy: Box<dyn ReplacementPolicy>,
    stats: SimStats,
    kind: PolicyKind,
}

impl std::fmt::Debug for PagingSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagingSimulator")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl PagingSimulator {
    /// Creates a simulator for the given policy and frame count.
    ///
    /// `trace` is required only for [`PolicyKind::Optimal`] and must be the
    /// complete, ordered page sequence that will later be replayed;
    /// supplying a different or shorter trace at replay time violates the
    /// Optimal contract and produces undefined victim choices. The other
    /// policies ignore it — they only ever see one reference at a time.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidFrameCount`] if `num_frames` is zero, and
    /// [`SimError::MissingTrace`] if the Optimal policy is selected without
    /// a trace.
    pub fn new(
        kind: PolicyKind,
        num_frames: usize,
        trace: Option<&[Page]>,
    ) -> Result<Self, SimError> {
        Self::build(kind, num_frames, trace, SimConfig::default_seed())
    }

    /// Creates a simulator from a validated configuration.
    ///
    /// Honors the configured Random seed; `trace` follows the same rules as
    /// [`PagingSimulator::new`].
    ///
    /// # Errors
    ///
    /// Returns any error from [`SimConfig::validate`], plus
    /// [`SimError::MissingTrace`] for Optimal without a trace.
    pub fn from_config(config: &SimConfig, trace: Option<&[Page]>) -> Result<Self, SimError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(SimConfig::default_seed);
        Self::build(config.policy, config.num_frames, trace, seed)
    }

    fn build(
        kind: PolicyKind,
        num_frames: usize,
        trace: Option<&[Page]>,
        seed: u64,
    ) -> Result<Self, SimError> {
        if num_frames == 0 {
            return Err(SimError::InvalidFrameCount);
        }

        let policy: Box<dyn ReplacementPolicy> = match kind {
            PolicyKind::Fifo => Box::new(FifoPolicy::new(num_frames)),
            PolicyKind::Lru => Box::new(LruPolicy::new(num_frames)),
            PolicyKind::Random => Box::new(RandomPolicy::with_seed(num_frames, seed)),
            PolicyKind::Optimal => {
                let trace = trace.ok_or(SimError::MissingTrace(kind))?;
                Box::new(OptimalPolicy::new(num_frames, trace))
            }
        };

        debug!(policy = %kind, num_frames, "pager constructed");
        Ok(Self {
            frames: FrameTable::new(num_frames),
            policy,
            stats: SimStats::default(),
            kind,
        })
    }

    /// Ensures `page` is resident and returns the frame holding it.
    ///
    /// On a hit the resident frame is returned unchanged; on a miss the
    /// fault counter is incremented, the policy picks a victim, and the page
    /// is installed there. Either way the policy observes the access, so
    /// immediately re-querying the same page is always a hit on the same
    /// frame.
    ///
    /// # Panics
    ///
    /// Panics if the policy returns a victim outside `[0, num_frames)`.
    /// That is a bug in the policy implementation and is not swallowed.
    pub fn access(&mut self, page: Page) -> usize {
        self.stats.accesses += 1;

        if let Some(frame) = self.frames.lookup(page) {
            self.stats.hits += 1;
            self.policy.record_access(page, frame);
            return frame;
        }

        self.stats.faults += 1;
        let victim = self.policy.choose_victim(&self.frames);
        assert!(
            victim < self.frames.num_frames(),
            "policy {} returned out-of-range victim {victim} (num_frames = {})",
            self.kind,
            self.frames.num_frames()
        );
        trace!(policy = %self.kind, %page, victim, evicted = ?self.frames.get(victim), "fault");
        self.frames.install(victim, page);
        self.policy.record_access(page, victim);
        victim
    }

    /// Total page faults so far. Non-decreasing; +1 per miss, +0 per hit.
    pub fn fault_count(&self) -> u64 {
        self.stats.faults
    }

    /// The counters collected so far.
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// The frame contents in frame order, for verification and debugging.
    pub fn frame_contents(&self) -> &[Option<Page>] {
        self.frames.contents()
    }

    /// The policy this simulator was constructed with.
    pub fn policy_kind(&self) -> PolicyKind {
        self.kind
    }

    /// Number of frames. Fixed at construction.
    pub fn num_frames(&self) -> usize {
        self.frames.num_frames()
    }
}
