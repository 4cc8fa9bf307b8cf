use crate::catalog::{AbilityCatalog, AbilityDefinition};
use crate::character::attributes::Attributes;
use crate::character::derived_stats::DerivedStats;
use crate::combat::status::ActiveStatuses;
use crate::error::CoreError;
use crate::items::equipment::Equipment;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// One side of a fight: immutable build plus session-scoped mutable state.
///
/// Construction validates the build against the catalog and resolves the
/// loadout to full definitions, so the resolution path never re-checks
/// configuration or touches the catalog again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub id: Uuid,
    pub name: String,
    pub level: u32,
    pub attributes: Attributes,
    pub equipment: Equipment,
    /// Resolved ability loadout, in firing-priority order. Ultimates are
    /// rejected at construction — this loadout runs unattended.
    pub loadout: Vec<AbilityDefinition>,
    pub stats: DerivedStats,

    // ── Session-scoped state ─────────────────────────────────────────────
    pub hp: f64,
    pub mana: f64,
    pub last_attack_at: f64,
    pub last_regen_at: f64,
    pub last_dot_tick_at: f64,
    /// Ability id → cooldown expiry timestamp.
    pub cooldowns: HashMap<String, f64>,
    pub statuses: ActiveStatuses,
    pub auto_attack_enabled: bool,
    pub auto_ability_enabled: bool,
}

impl Combatant {
    /// Builds a combatant at full HP/mana with empty cooldowns and effects.
    ///
    /// Fails fast on configuration errors: invalid level, malformed items,
    /// unknown or mismatched ability ids, ultimates in the loadout, or a
    /// loadout without a main-hand weapon.
    pub fn new(
        name: impl Into<String>,
        level: u32,
        attributes: Attributes,
        equipment: Equipment,
        loadout: Vec<String>,
        catalog: &AbilityCatalog,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        if level < 1 {
            return Err(CoreError::InvalidLevel { combatant: name });
        }

        let stats = DerivedStats::derive(&attributes, &equipment)?;

        let weapon = equipment.main_weapon();
        if weapon.is_none() && !loadout.is_empty() {
            return Err(CoreError::LoadoutWithoutWeapon { combatant: name });
        }
        let mut resolved = Vec::with_capacity(loadout.len());
        for id in loadout {
            let def = catalog.ability(&id).ok_or_else(|| CoreError::UnknownAbility {
                combatant: name.clone(),
                id: id.clone(),
            })?;
            let equipped = weapon.expect("checked above");
            if def.weapon != equipped {
                return Err(CoreError::AbilityWeaponMismatch {
                    combatant: name,
                    id,
                    ability_weapon: def.weapon,
                    equipped,
                });
            }
            if def.is_ultimate {
                return Err(CoreError::UltimateInLoadout { combatant: name, id });
            }
            resolved.push(def.clone());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            level,
            attributes,
            equipment,
            loadout: resolved,
            hp: stats.max_hp,
            mana: stats.max_mana,
            stats,
            last_attack_at: 0.0,
            last_regen_at: 0.0,
            last_dot_tick_at: 0.0,
            cooldowns: HashMap::new(),
            statuses: ActiveStatuses::new(),
            auto_attack_enabled: true,
            auto_ability_enabled: true,
        })
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Applies damage, clamping HP at zero.
    pub fn take_damage(&mut self, amount: f64) {
        debug_assert!(amount >= 0.0, "negative damage applied to {}", self.name);
        let amount = amount.max(0.0);
        self.hp = (self.hp - amount).max(0.0);
    }

    /// Accrues continuous mana regeneration up to `now`.
    pub fn regen_mana(&mut self, now: f64) {
        let elapsed = now - self.last_regen_at;
        if elapsed <= 0.0 {
            return;
        }
        self.mana = (self.mana + self.stats.mana_regen_per_sec * elapsed).min(self.stats.max_mana);
        self.last_regen_at = now;
    }

    pub fn spend_mana(&mut self, cost: f64) {
        debug_assert!(self.mana >= cost, "{} overspent mana", self.name);
        self.mana = (self.mana - cost).max(0.0);
    }

    /// Attack interval after dual-wield and active slows.
    pub fn current_attack_interval(&self, now: f64) -> f64 {
        self.stats.attack_interval * self.statuses.attack_interval_factor(now)
    }

    /// Whether the auto-attack cadence gate is open. Resetting the timer is
    /// the session's job, on fire.
    pub fn attack_ready(&self, now: f64) -> bool {
        now - self.last_attack_at >= self.current_attack_interval(now)
    }

    /// Index of the first loadout ability that is off cooldown and
    /// affordable at `now`.
    pub fn ready_ability(&self, now: f64) -> Option<usize> {
        self.loadout.iter().position(|def| {
            let off_cooldown = self
                .cooldowns
                .get(&def.id)
                .map_or(true, |&expiry| now >= expiry);
            off_cooldown && self.mana >= def.mana_cost
        })
    }

    /// Marks an ability as triggered: deducts mana, starts the cooldown.
    pub fn trigger_ability(&mut self, def: &AbilityDefinition, now: f64) {
        self.spend_mana(def.mana_cost);
        self.cooldowns.insert(def.id.clone(), now + def.cooldown);
    }

    /// Re-derives stats after an attribute or equipment change. Derived
    /// stats are never edited directly; anything that touches the build
    /// goes back through the attribute pipeline.
    pub fn recompute_stats(&mut self) -> Result<(), CoreError> {
        self.stats = DerivedStats::derive(&self.attributes, &self.equipment)?;
        self.hp = self.hp.min(self.stats.max_hp);
        self.mana = self.mana.min(self.stats.max_mana);
        Ok(())
    }

    /// Restores full HP/mana and clears cooldowns, effects, and timers.
    /// Called when a session takes ownership of the combatant.
    pub fn reset_session_state(&mut self) {
        self.hp = self.stats.max_hp;
        self.mana = self.stats.max_mana;
        self.cooldowns.clear();
        self.statuses = ActiveStatuses::new();
        self.last_attack_at = 0.0;
        self.last_regen_at = 0.0;
        self.last_dot_tick_at = 0.0;
    }

    /// Aligns session timers to `start` so cadence gates measure from the
    /// fight's first advance.
    pub fn begin_session(&mut self, start: f64) {
        self.last_attack_at = start;
        self.last_regen_at = start;
        self.last_dot_tick_at = start;
    }
}
