//! Read-only ability catalog consumed by the combat resolver.
//!
//! Definitions are plain data: a content-loading layer can deserialize its
//! own tables and build a catalog from them, or use the builtin reference
//! set in [`data`]. Lookup by ability id is O(1); lookup by weapon type
//! returns the ordered pool (regular abilities first, ultimates last).

pub mod data;

use crate::combat::status::StatusKind;
use crate::items::types::{DamageType, WeaponType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTarget {
    Caster,
    Enemy,
}

/// A status effect an ability may apply on a landed hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusTemplate {
    pub kind: StatusKind,
    pub magnitude: f64,
    pub duration: f64,
    /// Independent application chance in [0, 1].
    pub chance: f64,
    pub target: StatusTarget,
    /// Overrides the kind's default stack cap when set.
    #[serde(default)]
    pub max_stacks: Option<u32>,
    /// Accepted from content tables for arena-wide effects; in a duel the
    /// only member of "everyone on that side" is the single target.
    #[serde(default)]
    pub area: bool,
}

impl StatusTemplate {
    pub fn stack_cap(&self) -> u32 {
        self.max_stacks.unwrap_or_else(|| self.kind.default_max_stacks())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityDefinition {
    pub id: String,
    pub name: String,
    pub weapon: WeaponType,
    pub damage_type: DamageType,
    /// Multiplier applied to the relevant power stat, per hit.
    pub damage_multiplier: f64,
    pub hits: u32,
    pub cooldown: f64,
    pub mana_cost: f64,
    pub is_ultimate: bool,
    /// Overrides the default 2.0x ability crit multiplier when set.
    #[serde(default)]
    pub crit_multiplier: Option<f64>,
    /// Flat armor ignored on physical hits.
    #[serde(default)]
    pub armor_pen: f64,
    #[serde(default)]
    pub statuses: Vec<StatusTemplate>,
}

/// Indexed ability storage built once at startup.
#[derive(Debug, Clone)]
pub struct AbilityCatalog {
    abilities: Vec<AbilityDefinition>,
    by_id: HashMap<String, usize>,
    by_weapon: HashMap<WeaponType, Vec<usize>>,
}

impl AbilityCatalog {
    /// Builds a catalog from definitions. Within each weapon pool the input
    /// order is preserved, except that ultimates sort after regular
    /// abilities.
    pub fn new(definitions: Vec<AbilityDefinition>) -> Self {
        let mut by_id = HashMap::new();
        let mut by_weapon: HashMap<WeaponType, Vec<usize>> = HashMap::new();

        for (index, def) in definitions.iter().enumerate() {
            by_id.insert(def.id.clone(), index);
            by_weapon.entry(def.weapon).or_default().push(index);
        }
        for pool in by_weapon.values_mut() {
            pool.sort_by_key(|&i| definitions[i].is_ultimate);
        }

        Self {
            abilities: definitions,
            by_id,
            by_weapon,
        }
    }

    /// The builtin reference data set.
    pub fn builtin() -> Self {
        Self::new(data::builtin_abilities())
    }

    pub fn ability(&self, id: &str) -> Option<&AbilityDefinition> {
        self.by_id.get(id).map(|&i| &self.abilities[i])
    }

    /// Ordered pool for a weapon type: regular abilities first, then
    /// ultimates. Empty for weapon types with no registered abilities.
    pub fn abilities_for_weapon(&self, weapon: WeaponType) -> Vec<&AbilityDefinition> {
        self.by_weapon
            .get(&weapon)
            .map(|pool| pool.iter().map(|&i| &self.abilities[i]).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }
}
