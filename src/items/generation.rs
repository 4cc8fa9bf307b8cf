use super::names::generate_display_name;
use super::types::{EquipmentSlot, Item, Rarity, StatBonuses, WeaponType};
use crate::core::constants::*;
use rand::Rng;

/// Generate an armor piece for the given slot.
pub fn generate_item(slot: EquipmentSlot, rarity: Rarity, ilvl: u32, rng: &mut impl Rng) -> Item {
    debug_assert!(!slot.is_weapon_slot(), "use generate_weapon/generate_shield");
    let mut item = Item {
        slot,
        rarity,
        ilvl,
        weapon: None,
        shield: false,
        attack: 0.0,
        armor: armor_value(rarity, ilvl, 1.0),
        bonuses: generate_bonuses(rarity, ilvl, rng),
        display_name: String::new(),
    };
    item.display_name = generate_display_name(&item, rng);
    item
}

/// Generate a main-hand weapon of the given type.
pub fn generate_weapon(
    weapon: WeaponType,
    rarity: Rarity,
    ilvl: u32,
    rng: &mut impl Rng,
) -> Item {
    let mut item = Item {
        slot: EquipmentSlot::MainHand,
        rarity,
        ilvl,
        weapon: Some(weapon),
        shield: false,
        attack: weapon_attack(weapon, rarity, ilvl),
        armor: 0.0,
        bonuses: generate_bonuses(rarity, ilvl, rng),
        display_name: String::new(),
    };
    item.display_name = generate_display_name(&item, rng);
    item
}

/// Generate an off-hand shield.
pub fn generate_shield(rarity: Rarity, ilvl: u32, rng: &mut impl Rng) -> Item {
    let mut item = Item {
        slot: EquipmentSlot::OffHand,
        rarity,
        ilvl,
        weapon: None,
        shield: true,
        attack: 0.0,
        armor: armor_value(rarity, ilvl, SHIELD_ARMOR_FACTOR),
        bonuses: generate_bonuses(rarity, ilvl, rng),
        display_name: String::new(),
    };
    item.display_name = generate_display_name(&item, rng);
    item
}

/// Roll a random drop for any slot; weapon slots roll a random weapon type,
/// the off hand favors shields.
pub fn generate_for_slot(slot: EquipmentSlot, rarity: Rarity, ilvl: u32, rng: &mut impl Rng) -> Item {
    match slot {
        EquipmentSlot::MainHand => {
            let weapons = WeaponType::all();
            generate_weapon(weapons[rng.gen_range(0..weapons.len())], rarity, ilvl, rng)
        }
        EquipmentSlot::OffHand => generate_shield(rarity, ilvl, rng),
        _ => generate_item(slot, rarity, ilvl, rng),
    }
}

pub fn random_slot(rng: &mut impl Rng) -> EquipmentSlot {
    match rng.gen_range(0..NUM_EQUIPMENT_SLOTS) {
        0 => EquipmentSlot::Helmet,
        1 => EquipmentSlot::Chest,
        2 => EquipmentSlot::Legs,
        3 => EquipmentSlot::Boots,
        4 => EquipmentSlot::Gloves,
        5 => EquipmentSlot::MainHand,
        6 => EquipmentSlot::OffHand,
        _ => unreachable!(),
    }
}

/// Item-level multiplier for stat scaling.
/// ilvl 10: 1.0x, ilvl 40: 2.0x, ilvl 100: 4.0x.
fn ilvl_multiplier(ilvl: u32) -> f64 {
    1.0 + (ilvl.max(10) as f64 - ILVL_SCALING_BASE) / ILVL_SCALING_DIVISOR
}

fn rarity_magnitude(rarity: Rarity) -> f64 {
    match rarity {
        Rarity::Common => 1.0,
        Rarity::Uncommon => 1.15,
        Rarity::Rare => 1.3,
        Rarity::Epic => 1.5,
        Rarity::Legendary => 1.75,
        Rarity::Mythic => 2.0,
    }
}

fn weapon_attack(weapon: WeaponType, rarity: Rarity, ilvl: u32) -> f64 {
    weapon.base_attack() * ilvl_multiplier(ilvl) * rarity_magnitude(rarity)
}

fn armor_value(rarity: Rarity, ilvl: u32, factor: f64) -> f64 {
    ARMOR_VALUE_PER_ILVL * ilvl_multiplier(ilvl) * rarity_magnitude(rarity) * factor
}

/// Roll 1-4 named-stat increments depending on rarity.
fn generate_bonuses(rarity: Rarity, ilvl: u32, rng: &mut impl Rng) -> StatBonuses {
    let (count, base_min, base_max) = match rarity {
        Rarity::Common => (1, 1, 2),
        Rarity::Uncommon => (1, 2, 3),
        Rarity::Rare => (2, 2, 4),
        Rarity::Epic => (2, 3, 5),
        Rarity::Legendary => (3, 4, 6),
        Rarity::Mythic => (4, 5, 8),
    };
    let multiplier = ilvl_multiplier(ilvl);

    let mut bonuses = StatBonuses::new();
    for _ in 0..count {
        let base = rng.gen_range(base_min..=base_max) as f64;
        let value = ((base * multiplier).round() as u32).max(1);
        match rng.gen_range(0..6) {
            0 => bonuses.might += value,
            1 => bonuses.agility += value,
            2 => bonuses.vitality += value,
            3 => bonuses.intellect += value,
            4 => bonuses.wisdom += value,
            5 => bonuses.charisma += value,
            _ => unreachable!(),
        }
    }
    bonuses
}
