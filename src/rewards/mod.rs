//! Experience, gold, and equipment-drop computation for a resolved fight.

use crate::core::constants::*;
use crate::items::generation::{generate_for_slot, random_slot};
use crate::items::types::{Item, Rarity};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FightMode {
    Pvp,
    Pve,
}

/// Per-enemy reward configuration for PvE fights, supplied by the caller's
/// content tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyRewards {
    pub experience: u64,
    pub gold_min: u64,
    pub gold_max: u64,
    /// Bernoulli drop chance in [0, 1].
    pub drop_chance: f64,
    pub item_level: u32,
}

impl Default for EnemyRewards {
    fn default() -> Self {
        Self {
            experience: 40,
            gold_min: 5,
            gold_max: 20,
            drop_chance: 0.15,
            item_level: 10,
        }
    }
}

/// Reward policy knobs. The level gates and coefficients are policy copied
/// from the game design, not engine invariants, so they live in config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    pub pvp_xp_base: u64,
    pub pvp_xp_per_level: u64,
    pub pvp_gold_base: u64,
    pub pvp_gold_per_level: u64,
    pub pvp_drop_chance: f64,
    pub legendary_level_gate: u32,
    pub mythic_level_gate: u32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            pvp_xp_base: PVP_XP_BASE,
            pvp_xp_per_level: PVP_XP_PER_LEVEL,
            pvp_gold_base: PVP_GOLD_BASE,
            pvp_gold_per_level: PVP_GOLD_PER_LEVEL,
            pvp_drop_chance: PVP_DROP_CHANCE,
            legendary_level_gate: LEGENDARY_LEVEL_GATE,
            mythic_level_gate: MYTHIC_LEVEL_GATE,
        }
    }
}

/// What the winner walks away with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FightRewards {
    pub experience: u64,
    pub gold: u64,
    pub equipment: Option<Item>,
}

/// Computes the winner's rewards. PvE draws from the enemy's configured
/// amounts; PvP scales with the level differential.
pub fn compute(
    winner_level: u32,
    loser_level: u32,
    mode: FightMode,
    enemy: Option<&EnemyRewards>,
    config: &RewardConfig,
    rng: &mut impl Rng,
) -> FightRewards {
    match mode {
        FightMode::Pve => {
            let enemy = enemy.cloned().unwrap_or_default();
            let gold = if enemy.gold_max > enemy.gold_min {
                rng.gen_range(enemy.gold_min..=enemy.gold_max)
            } else {
                enemy.gold_min
            };
            let equipment = (rng.gen::<f64>() < enemy.drop_chance).then(|| {
                let rarity = roll_pve_rarity(rng);
                generate_for_slot(random_slot(rng), rarity, enemy.item_level, rng)
            });
            FightRewards {
                experience: enemy.experience.max(MIN_XP_REWARD),
                gold,
                equipment,
            }
        }
        FightMode::Pvp => {
            let base_xp = config.pvp_xp_base + loser_level as u64 * config.pvp_xp_per_level;
            let differential = loser_level as f64 - winner_level as f64;
            let scale =
                (1.0 + PVP_LEVEL_SCALING_STEP * differential).max(PVP_LEVEL_SCALING_FLOOR);
            let experience = ((base_xp as f64 * scale) as u64).max(MIN_XP_REWARD);

            let gold = config.pvp_gold_base + loser_level as u64 * config.pvp_gold_per_level;

            let equipment = (rng.gen::<f64>() < config.pvp_drop_chance).then(|| {
                let rarity = roll_pvp_rarity(winner_level, config, rng);
                generate_for_slot(random_slot(rng), rarity, loser_level.max(10), rng)
            });

            FightRewards {
                experience,
                gold,
                equipment,
            }
        }
    }
}

/// PvE rarity table, capped at Rare.
pub fn roll_pve_rarity(rng: &mut impl Rng) -> Rarity {
    let roll = rng.gen::<f64>();
    if roll < PVE_RARITY_COMMON_THRESHOLD {
        Rarity::Common
    } else if roll < PVE_RARITY_UNCOMMON_THRESHOLD {
        Rarity::Uncommon
    } else {
        Rarity::Rare
    }
}

/// PvP rarity table. The two highest tiers are gated by winner level and
/// downgrade to Epic below their gates.
pub fn roll_pvp_rarity(winner_level: u32, config: &RewardConfig, rng: &mut impl Rng) -> Rarity {
    let roll = rng.gen::<f64>();
    let rarity = if roll < PVP_RARITY_COMMON_THRESHOLD {
        Rarity::Common
    } else if roll < PVP_RARITY_UNCOMMON_THRESHOLD {
        Rarity::Uncommon
    } else if roll < PVP_RARITY_RARE_THRESHOLD {
        Rarity::Rare
    } else if roll < PVP_RARITY_EPIC_THRESHOLD {
        Rarity::Epic
    } else if roll < PVP_RARITY_LEGENDARY_THRESHOLD {
        Rarity::Legendary
    } else {
        Rarity::Mythic
    };

    match rarity {
        Rarity::Mythic if winner_level < config.mythic_level_gate => {
            if winner_level >= config.legendary_level_gate {
                Rarity::Legendary
            } else {
                Rarity::Epic
            }
        }
        Rarity::Legendary if winner_level < config.legendary_level_gate => Rarity::Epic,
        other => other,
    }
}
