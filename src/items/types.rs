use crate::core::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Helmet,
    Chest,
    Legs,
    Boots,
    Gloves,
    MainHand,
    OffHand,
}

impl EquipmentSlot {
    pub fn is_weapon_slot(&self) -> bool {
        matches!(self, EquipmentSlot::MainHand | EquipmentSlot::OffHand)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythic = 5,
}

impl Rarity {
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    Sword,
    Axe,
    Dagger,
    Mace,
    Staff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageType {
    Physical,
    Magical,
}

impl WeaponType {
    pub fn all() -> [WeaponType; 5] {
        [
            WeaponType::Sword,
            WeaponType::Axe,
            WeaponType::Dagger,
            WeaponType::Mace,
            WeaponType::Staff,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            WeaponType::Sword => 0,
            WeaponType::Axe => 1,
            WeaponType::Dagger => 2,
            WeaponType::Mace => 3,
            WeaponType::Staff => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WeaponType::Sword => "Sword",
            WeaponType::Axe => "Axe",
            WeaponType::Dagger => "Dagger",
            WeaponType::Mace => "Mace",
            WeaponType::Staff => "Staff",
        }
    }

    /// Seconds between auto-attacks for this weapon, before dual-wield
    /// and slow adjustments.
    pub fn attack_interval(&self) -> f64 {
        WEAPON_STATS[self.index()].0
    }

    /// Base attack value at item level 10, before level and rarity scaling.
    pub fn base_attack(&self) -> f64 {
        WEAPON_STATS[self.index()].1
    }

    /// Staves channel spell power; everything else swings with attack power.
    pub fn damage_type(&self) -> DamageType {
        match self {
            WeaponType::Staff => DamageType::Magical,
            _ => DamageType::Physical,
        }
    }
}

/// Named-stat increments carried by an item, added to base attributes
/// before any derived stat is computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct StatBonuses {
    pub might: u32,
    pub agility: u32,
    pub vitality: u32,
    pub intellect: u32,
    pub wisdom: u32,
    pub charisma: u32,
}

impl StatBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u32 {
        self.might + self.agility + self.vitality + self.intellect + self.wisdom + self.charisma
    }

    pub fn to_attributes(&self) -> crate::character::attributes::Attributes {
        crate::character::attributes::Attributes::from_values(
            self.might,
            self.agility,
            self.vitality,
            self.intellect,
            self.wisdom,
            self.charisma,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub slot: EquipmentSlot,
    pub rarity: Rarity,
    pub ilvl: u32,
    /// Present on weapons only; determines ability pool and attack cadence
    /// when held in the main hand.
    #[serde(default)]
    pub weapon: Option<WeaponType>,
    /// Off-hand shields grant armor instead of attack.
    #[serde(default)]
    pub shield: bool,
    /// Flat attack contributed by a weapon.
    pub attack: f64,
    /// Flat defense contributed by armor pieces and shields.
    pub armor: f64,
    pub bonuses: StatBonuses,
    pub display_name: String,
}

impl Item {
    /// Checks the slot/weapon/shield consistency rules. Construction through
    /// `generation` always yields valid items; hand-built items go through
    /// this at combatant construction.
    pub fn validate(&self) -> Result<(), crate::error::CoreError> {
        let fail = |reason: &str| {
            Err(crate::error::CoreError::MalformedItem {
                name: self.display_name.clone(),
                slot: self.slot,
                reason: reason.to_string(),
            })
        };

        match self.slot {
            EquipmentSlot::MainHand => {
                if self.weapon.is_none() {
                    return fail("main-hand item has no weapon type");
                }
                if self.shield {
                    return fail("shields cannot occupy the main hand");
                }
            }
            EquipmentSlot::OffHand => {
                if self.weapon.is_some() == self.shield {
                    return fail("off-hand item must be exactly one of weapon or shield");
                }
            }
            _ => {
                if self.weapon.is_some() {
                    return fail("weapon type on an armor slot");
                }
                if self.shield {
                    return fail("shield flag on an armor slot");
                }
            }
        }
        Ok(())
    }
}
