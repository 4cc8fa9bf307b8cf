use super::attributes::{AttributeType, Attributes};
use crate::core::constants::*;
use crate::error::CoreError;
use crate::items::equipment::Equipment;
use serde::{Deserialize, Serialize};

/// Combat stats computed from attributes plus equipment. Never mutated
/// directly — recomputed whenever attributes or equipment change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub attack_power: f64,
    pub spell_power: f64,
    pub defense: f64,
    pub magic_resist: f64,
    pub crit_chance: f64,
    pub dodge_chance: f64,
    pub parry_chance: f64,
    pub max_hp: f64,
    pub max_mana: f64,
    pub mana_regen_per_sec: f64,
    /// Seconds between auto-attacks, after the dual-wield speed bonus.
    pub attack_interval: f64,
    pub dual_wielding: bool,
}

impl DerivedStats {
    /// Derives combat stats from attributes and equipment.
    ///
    /// Equipment stat bonuses are added to base attributes before any formula
    /// runs — gear never bypasses the attribute pipeline. Flat weapon attack
    /// and armor values are folded in afterwards. Malformed items are
    /// rejected here rather than silently defaulted.
    pub fn derive(attrs: &Attributes, equipment: &Equipment) -> Result<Self, CoreError> {
        equipment.validate()?;

        let mut total = *attrs;
        for item in equipment.iter_equipped() {
            total.add(&item.bonuses.to_attributes());
        }

        let might = total.get(AttributeType::Might) as f64;
        let agility = total.get(AttributeType::Agility) as f64;
        let vitality = total.get(AttributeType::Vitality) as f64;
        let intellect = total.get(AttributeType::Intellect) as f64;
        let wisdom = total.get(AttributeType::Wisdom) as f64;

        let dual_wielding = equipment.is_dual_wielding();

        // Weapon attack: main hand plus a penalized off hand when dual-wielding
        let main_attack = equipment.main_hand.as_ref().map_or(0.0, |i| i.attack);
        let off_attack = equipment.off_hand.as_ref().map_or(0.0, |i| i.attack);
        let weapon_attack = main_attack + off_attack * OFFHAND_ATTACK_FACTOR;

        let attack_power =
            might * ATTACK_POWER_PER_MIGHT + agility * ATTACK_POWER_PER_AGILITY + weapon_attack;
        let spell_power = intellect * SPELL_POWER_PER_INTELLECT + wisdom * SPELL_POWER_PER_WISDOM;

        let armor_sum: f64 = equipment.iter_equipped().map(|i| i.armor).sum();
        let mut defense = vitality * DEFENSE_PER_VITALITY + armor_sum;
        if equipment.has_shield() {
            defense *= SHIELD_DEFENSE_FACTOR;
        }

        let magic_resist = wisdom * RESIST_PER_WISDOM + vitality * RESIST_PER_VITALITY;

        let crit_chance =
            (BASE_CRIT_CHANCE + agility * CRIT_PER_AGILITY + intellect * CRIT_PER_INTELLECT)
                .min(CRIT_CHANCE_CAP);
        let dodge_chance =
            (BASE_DODGE_CHANCE + agility * DODGE_PER_AGILITY + wisdom * DODGE_PER_WISDOM)
                .min(DODGE_CHANCE_CAP);
        let parry_chance =
            (BASE_PARRY_CHANCE + might * PARRY_PER_MIGHT + vitality * PARRY_PER_VITALITY)
                .min(PARRY_CHANCE_CAP);

        let max_hp = BASE_HP + might * HP_PER_MIGHT + vitality * HP_PER_VITALITY;
        let max_mana = BASE_MANA + intellect * MANA_PER_INTELLECT + wisdom * MANA_PER_WISDOM;
        let mana_regen_per_sec = BASE_MANA_REGEN_PER_SEC + wisdom * MANA_REGEN_PER_WISDOM;

        let base_interval = equipment
            .main_weapon()
            .map_or(UNARMED_ATTACK_INTERVAL, |w| w.attack_interval());
        let attack_interval = if dual_wielding {
            base_interval * DUAL_WIELD_SPEED_FACTOR
        } else {
            base_interval
        };

        Ok(Self {
            attack_power,
            spell_power,
            defense,
            magic_resist,
            crit_chance,
            dodge_chance,
            parry_chance,
            max_hp,
            max_mana,
            mana_regen_per_sec,
            attack_interval,
            dual_wielding,
        })
    }

    /// Power stat feeding the damage formula for the given damage type.
    pub fn power(&self, damage_type: crate::items::types::DamageType) -> f64 {
        match damage_type {
            crate::items::types::DamageType::Physical => self.attack_power,
            crate::items::types::DamageType::Magical => self.spell_power,
        }
    }
}
