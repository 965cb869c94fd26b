//! Virtual-memory page replacement simulator library.
//!
//! This crate implements a sequential page replacement simulator with the following:
//! 1. **Policies:** FIFO, LRU, Random, and Optimal (Belady) victim selection.
//! 2. **Simulation:** Frame table, access replay, and hit/fault accounting.
//! 3. **Lookahead:** Amortized per-page future-position queues for the Optimal policy.
//! 4. **Configuration:** Serde-deserializable settings with validated defaults.
//! 5. **Statistics:** Fault counters, derived rates, and report output.

/// Common types (page identifiers, error taxonomy).
pub mod common;
/// Simulator configuration (defaults, policy selection, validation).
pub mod config;
/// Replacement policies (FIFO, LRU, Random, Optimal) and the policy trait.
pub mod policy;
/// Simulation layer (frame table, simulator, trace loading).
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Page identifier; derive one from a raw address with [`Page::containing`].
pub use crate::common::Page;
/// Error type for construction and trace loading failures.
pub use crate::common::SimError;
/// Root configuration type; use `SimConfig::default_for` or deserialize from JSON.
pub use crate::config::{PolicyKind, SimConfig};
/// Main simulator type; construct with `PagingSimulator::new` and drive with `access`.
pub use crate::sim::PagingSimulator;
/// Hit/fault counters collected during a replay.
pub use crate::stats::SimStats;
