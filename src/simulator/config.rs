//! Simulation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a batch of simulated duels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of duels to run
    pub num_duels: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Seconds between advances, simulating the caller's polling cadence
    pub step_seconds: f64,

    /// Give up on a duel after this much simulated time
    pub max_duel_seconds: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-duel)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_duels: 1000,
            seed: None,
            step_seconds: 0.5,
            max_duel_seconds: 600.0,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for fairness checks on mirror matchups.
    pub fn fairness_test(num_duels: u32, seed: u64) -> Self {
        Self {
            num_duels,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }
}
