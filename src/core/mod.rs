//! Core tuning constants.

pub mod constants;

pub use constants::*;
