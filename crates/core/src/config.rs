//! Configuration for the page replacement simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline constants (page size, random seed).
//! 2. **Policy Selection:** The closed set of replacement algorithms.
//! 3. **Validation:** Construction-time checks that fail loudly instead of
//!    silently defaulting.
//!
//! Configuration is supplied as JSON (see the CLI's `--config`) or built in
//! code; per-field serde defaults mirror `SimConfig::default_for`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Default page size used to derive page numbers from raw addresses.
    ///
    /// Traces in this repository store small decimal addresses, so the
    /// historical default is 10 rather than a power of two.
    pub const PAGE_SIZE: u64 = 10;

    /// Default xorshift seed for the Random policy.
    ///
    /// A fixed constant keeps unseeded runs reproducible.
    pub const RANDOM_SEED: u64 = 123_456_789;
}

/// Page replacement policy algorithms.
///
/// Specifies the algorithm used to select which resident page to evict when
/// a fault occurs with every frame occupied. The set is closed: no open
/// extension point is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    /// First In First Out replacement.
    ///
    /// Evicts frames in the order they were filled (round-robin).
    #[default]
    #[serde(alias = "Fifo")]
    Fifo,
    /// Least Recently Used replacement.
    ///
    /// Evicts the resident page that was accessed least recently.
    #[serde(alias = "Lru")]
    Lru,
    /// Random replacement.
    ///
    /// Evicts a uniformly random frame once the table has filled.
    #[serde(alias = "Random")]
    Random,
    /// Optimal (Belady) replacement.
    ///
    /// Clairvoyant offline policy: evicts the resident page whose next use
    /// lies furthest in the future. Requires the complete trace up front and
    /// is the fault-count lower bound for the other policies.
    #[serde(alias = "OPT", alias = "Opt")]
    Optimal,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fifo => write!(f, "FIFO"),
            Self::Lru => write!(f, "LRU"),
            Self::Random => write!(f, "Random"),
            Self::Optimal => write!(f, "OPT"),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = SimError;

    /// Parses an algorithm name as written on the command line.
    ///
    /// Accepts the canonical spellings `FIFO`, `LRU`, `Random`, and `OPT`
    /// (case-insensitive, with `Optimal` as a long form for `OPT`). Any
    /// other name is an [`SimError::UnsupportedPolicy`] — the failure is
    /// surfaced before any access is processed, never deferred to the first
    /// eviction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            "random" => Ok(Self::Random),
            "opt" | "optimal" => Ok(Self::Optimal),
            _ => Err(SimError::UnsupportedPolicy(s.to_string())),
        }
    }
}

/// Root configuration for one simulation run.
///
/// # Examples
///
/// Deserializing from JSON (typical `--config` usage):
///
/// ```
/// use pagesim_core::config::{PolicyKind, SimConfig};
///
/// let json = r#"{
///     "num_frames": 4,
///     "page_size": 10,
///     "policy": "OPT"
/// }"#;
///
/// let config: SimConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.num_frames, 4);
/// assert_eq!(config.policy, PolicyKind::Optimal);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SimConfig {
    /// Number of physical frames. Fixed for the lifetime of the simulation;
    /// must be at least 1.
    pub num_frames: usize,

    /// Page size used to derive page numbers from raw trace addresses.
    #[serde(default = "SimConfig::default_page_size")]
    pub page_size: u64,

    /// Replacement policy to simulate.
    #[serde(default)]
    pub policy: PolicyKind,

    /// Seed for the Random policy. `None` uses the built-in constant; other
    /// policies ignore it.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimConfig {
    /// Returns the default page size.
    fn default_page_size() -> u64 {
        defaults::PAGE_SIZE
    }

    /// Returns the built-in Random policy seed.
    pub fn default_seed() -> u64 {
        defaults::RANDOM_SEED
    }

    /// Creates a configuration for the given policy and frame count, with
    /// all other fields at their defaults.
    pub fn default_for(policy: PolicyKind, num_frames: usize) -> Self {
        Self {
            num_frames,
            page_size: defaults::PAGE_SIZE,
            policy,
            seed: None,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidFrameCount`] if `num_frames` is zero and
    /// [`SimError::InvalidPageSize`] if `page_size` is zero. Both are fatal
    /// at construction; neither is silently defaulted.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.num_frames == 0 {
            return Err(SimError::InvalidFrameCount);
        }
        if self.page_size == 0 {
            return Err(SimError::InvalidPageSize);
        }
        Ok(())
    }
}
