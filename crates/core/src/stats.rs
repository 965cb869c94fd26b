//! Simulation statistics collection and reporting.
//!
//! This module tracks the outcome of a trace replay. It provides:
//! 1. **Counters:** Total accesses, hits, and page faults.
//! 2. **Derived metrics:** Hit rate and fault rate.
//! 3. **Reporting:** A plain-text summary and a serializable form for JSON output.

use std::time::Instant;

use serde::Serialize;

/// Counters collected while replaying an access trace.
///
/// The fault count is monotonically non-decreasing: it is incremented exactly
/// once per miss and never on a hit. `accesses == hits + faults` holds at all
/// times.
#[derive(Clone, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total accesses replayed.
    pub accesses: u64,
    /// Accesses that found their page resident.
    pub hits: u64,
    /// Accesses that faulted and triggered an install (and, once the table
    /// is full, an eviction).
    pub faults: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            accesses: 0,
            hits: 0,
            faults: 0,
        }
    }
}

impl SimStats {
    /// Fraction of accesses that hit, in `[0, 1]`.
    ///
    /// Returns 0 for an empty replay rather than dividing by zero.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    /// Fraction of accesses that faulted, in `[0, 1]`.
    ///
    /// Returns 0 for an empty replay rather than dividing by zero.
    pub fn fault_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.faults as f64 / self.accesses as f64
        }
    }

    /// Prints the statistics summary to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        println!("\n==========================================================");
        println!("PAGE REPLACEMENT SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_accesses             {}", self.accesses);
        println!("sim_hits                 {}", self.hits);
        println!("sim_faults               {}", self.faults);
        println!("sim_hit_rate             {:.2}%", self.hit_rate() * 100.0);
        println!("sim_fault_rate           {:.2}%", self.fault_rate() * 100.0);
        println!("==========================================================");
    }
}
