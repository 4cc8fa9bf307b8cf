//! Item system: types, equipment, and generation.

#![allow(unused_imports)]

pub mod equipment;
pub mod generation;
pub mod names;
pub mod types;

pub use equipment::*;
pub use generation::*;
pub use types::*;
