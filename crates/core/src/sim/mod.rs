//! Simulation layer: frame table, replay driver, and trace loading.
//!
//! Provides the ownership root for physical frames, the simulator that
//! replays accesses against a chosen policy, and the utilities that turn a
//! raw address trace into page numbers.

/// Fixed-capacity frame table.
pub mod frame_table;

/// Access replay and hit/fault accounting.
pub mod simulator;

/// Trace loading and page-number derivation.
pub mod trace;

pub use frame_table::FrameTable;
pub use simulator::PagingSimulator;
pub use trace::{load_trace, parse_trace};
