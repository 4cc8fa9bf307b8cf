//! Pure hit-resolution math shared by auto-attacks and abilities.
//!
//! Nothing here mutates combatants; the session applies the returned
//! outcomes. All randomness comes from the caller's Rng.

use crate::character::derived_stats::DerivedStats;
use crate::combat::status::ActiveStatuses;
use crate::core::constants::*;
use crate::items::types::DamageType;
use rand::Rng;

/// What one strike is attempting, before the defender gets a say.
#[derive(Debug, Clone, Copy)]
pub struct AttackProfile {
    pub damage_type: DamageType,
    /// Multiplier on the relevant power stat (1.0 for auto-attacks).
    pub damage_multiplier: f64,
    pub crit_multiplier: f64,
    /// Flat armor ignored on physical hits, before armor-pen buffs.
    pub armor_pen: f64,
}

impl AttackProfile {
    pub fn auto_attack(damage_type: DamageType) -> Self {
        Self {
            damage_type,
            damage_multiplier: 1.0,
            crit_multiplier: AUTO_ATTACK_CRIT_MULTIPLIER,
            armor_pen: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitOutcome {
    Dodged,
    Parried,
    Hit { damage: f64, crit: bool },
}

impl HitOutcome {
    pub fn landed(&self) -> bool {
        matches!(self, HitOutcome::Hit { .. })
    }
}

/// Resolves a single strike: dodge first, then parry, then the damage
/// formula with the crit roll applied last.
pub fn resolve_hit(
    attacker: &DerivedStats,
    attacker_statuses: &ActiveStatuses,
    defender: &DerivedStats,
    defender_statuses: &ActiveStatuses,
    profile: &AttackProfile,
    now: f64,
    rng: &mut impl Rng,
) -> HitOutcome {
    if rng.gen::<f64>() < defender.dodge_chance {
        return HitOutcome::Dodged;
    }
    if rng.gen::<f64>() < defender.parry_chance {
        return HitOutcome::Parried;
    }

    let mut base = attacker.power(profile.damage_type) * profile.damage_multiplier;
    if attacker.dual_wielding {
        base *= DUAL_WIELD_DAMAGE_FACTOR;
    }
    base *= 1.0 + attacker_statuses.damage_boost(now);
    base *= 1.0 + defender_statuses.vulnerability(now);
    base *= rng.gen_range(DAMAGE_VARIANCE_MIN..DAMAGE_VARIANCE_MAX);

    let mitigated = match profile.damage_type {
        DamageType::Physical => {
            let pen = profile.armor_pen + attacker_statuses.armor_pen(now);
            base - (defender.defense - pen).max(0.0)
        }
        DamageType::Magical => {
            let resist = defender.magic_resist;
            let reduction = resist / (resist + RESIST_CURVE_CONSTANT);
            base * (1.0 - reduction)
        }
    };

    let crit = rng.gen::<f64>() < attacker.crit_chance;
    let mut damage = if crit {
        mitigated * profile.crit_multiplier
    } else {
        mitigated
    };

    // Mitigation never reduces a landed hit below a fraction of what it
    // would have dealt unmitigated, and never below zero.
    damage = damage.max(base * DAMAGE_FLOOR_FRACTION).max(0.0);

    HitOutcome::Hit { damage, crit }
}
