//! Typed errors raised at the combat core's construction boundary.
//!
//! Everything here is a configuration error: bad input caught before a
//! session starts. The hot resolution path never raises — once a Combatant
//! and CombatSession are built, the data they carry has been validated.

use thiserror::Error;

use crate::items::types::{EquipmentSlot, WeaponType};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("combatant `{combatant}`: unknown ability id `{id}` in loadout")]
    UnknownAbility { combatant: String, id: String },

    #[error(
        "combatant `{combatant}`: ability `{id}` belongs to {ability_weapon:?}, \
         but {equipped:?} is equipped"
    )]
    AbilityWeaponMismatch {
        combatant: String,
        id: String,
        ability_weapon: WeaponType,
        equipped: WeaponType,
    },

    #[error("combatant `{combatant}`: ultimate ability `{id}` cannot be slotted for auto-use")]
    UltimateInLoadout { combatant: String, id: String },

    #[error("combatant `{combatant}`: loadout requires a main-hand weapon")]
    LoadoutWithoutWeapon { combatant: String },

    #[error("item `{name}` in slot {slot:?} is malformed: {reason}")]
    MalformedItem {
        name: String,
        slot: EquipmentSlot,
        reason: String,
    },

    #[error("combatant `{combatant}`: level must be at least 1")]
    InvalidLevel { combatant: String },

    #[error("no abilities registered for weapon type {weapon:?}")]
    UnknownWeaponType { weapon: WeaponType },
}
