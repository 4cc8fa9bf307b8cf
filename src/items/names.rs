use super::types::{EquipmentSlot, Item, Rarity, WeaponType};
use rand::Rng;

/// Builds a display name from the rarity prefix and the item's base noun.
pub fn generate_display_name(item: &Item, rng: &mut impl Rng) -> String {
    let prefix = rarity_prefix(item.rarity, rng);
    let noun = base_noun(item);
    if prefix.is_empty() {
        noun.to_string()
    } else {
        format!("{} {}", prefix, noun)
    }
}

fn rarity_prefix(rarity: Rarity, rng: &mut impl Rng) -> &'static str {
    let pool: &[&'static str] = match rarity {
        Rarity::Common => &[""],
        Rarity::Uncommon => &["Sturdy", "Keen", "Polished"],
        Rarity::Rare => &["Gleaming", "Runed", "Tempered"],
        Rarity::Epic => &["Stormforged", "Sinister", "Radiant"],
        Rarity::Legendary => &["Dragonbone", "Eternal", "Vengeful"],
        Rarity::Mythic => &["Worldbreaker", "Voidtouched", "Ascendant"],
    };
    pool[rng.gen_range(0..pool.len())]
}

fn base_noun(item: &Item) -> &'static str {
    if item.shield {
        return "Shield";
    }
    if let Some(weapon) = item.weapon {
        return match weapon {
            WeaponType::Sword => "Sword",
            WeaponType::Axe => "Axe",
            WeaponType::Dagger => "Dagger",
            WeaponType::Mace => "Mace",
            WeaponType::Staff => "Staff",
        };
    }
    match item.slot {
        EquipmentSlot::Helmet => "Helm",
        EquipmentSlot::Chest => "Breastplate",
        EquipmentSlot::Legs => "Greaves",
        EquipmentSlot::Boots => "Boots",
        EquipmentSlot::Gloves => "Gauntlets",
        EquipmentSlot::MainHand | EquipmentSlot::OffHand => "Blade",
    }
}
