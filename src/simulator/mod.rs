//! Monte Carlo duel simulator for balance analysis.
//!
//! Runs batches of full combat sessions through the public API to check
//! matchup fairness, time-to-kill, and reward pacing. The `simulate`
//! binary is the command-line front end.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{DuelStats, SimReport};
pub use runner::run_duels;
