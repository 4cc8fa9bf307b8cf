//! IdleDuelist combat core.
//!
//! The auto-combat resolution engine of an idle RPG: given two combatants'
//! attributes, gear, and ability loadouts, a [`combat::CombatSession`]
//! advances the fight tick-by-tick — attack-speed-gated auto-attacks,
//! mana-gated auto-abilities, status-effect ticks, dodge/parry/crit
//! resolution — until one side hits zero HP, then computes the rewards.
//!
//! The engine performs no I/O and owns no global state: the caller supplies
//! the clock to `advance(now)` and owns the sessions (see
//! [`orchestrator::SessionStore`]). Distinct sessions can be driven in
//! parallel; a single session must be advanced from one thread at a time.

pub mod catalog;
pub mod character;
pub mod combat;
pub mod core;
pub mod error;
pub mod items;
pub mod orchestrator;
pub mod rewards;
pub mod simulator;

pub use combat::combatant::Combatant;
pub use combat::session::{CombatSession, SessionPhase};
pub use error::CoreError;
pub use rewards::{EnemyRewards, FightMode, FightRewards, RewardConfig};
