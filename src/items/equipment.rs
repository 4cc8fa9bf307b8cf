use super::types::{EquipmentSlot, Item, WeaponType};
use serde::{Deserialize, Serialize};

/// Equipped gear, one optional item per slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Equipment {
    pub helmet: Option<Item>,
    pub chest: Option<Item>,
    pub legs: Option<Item>,
    pub boots: Option<Item>,
    pub gloves: Option<Item>,
    pub main_hand: Option<Item>,
    pub off_hand: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> &Option<Item> {
        match slot {
            EquipmentSlot::Helmet => &self.helmet,
            EquipmentSlot::Chest => &self.chest,
            EquipmentSlot::Legs => &self.legs,
            EquipmentSlot::Boots => &self.boots,
            EquipmentSlot::Gloves => &self.gloves,
            EquipmentSlot::MainHand => &self.main_hand,
            EquipmentSlot::OffHand => &self.off_hand,
        }
    }

    pub fn set(&mut self, slot: EquipmentSlot, item: Option<Item>) {
        match slot {
            EquipmentSlot::Helmet => self.helmet = item,
            EquipmentSlot::Chest => self.chest = item,
            EquipmentSlot::Legs => self.legs = item,
            EquipmentSlot::Boots => self.boots = item,
            EquipmentSlot::Gloves => self.gloves = item,
            EquipmentSlot::MainHand => self.main_hand = item,
            EquipmentSlot::OffHand => self.off_hand = item,
        }
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        [
            &self.helmet,
            &self.chest,
            &self.legs,
            &self.boots,
            &self.gloves,
            &self.main_hand,
            &self.off_hand,
        ]
        .into_iter()
        .filter_map(|slot| slot.as_ref())
    }

    /// Weapon type of the main-hand item, if any.
    pub fn main_weapon(&self) -> Option<WeaponType> {
        self.main_hand.as_ref().and_then(|item| item.weapon)
    }

    /// Both hands hold weapons (the off-hand is not a shield).
    pub fn is_dual_wielding(&self) -> bool {
        self.main_hand.as_ref().is_some_and(|i| i.weapon.is_some())
            && self.off_hand.as_ref().is_some_and(|i| i.weapon.is_some())
    }

    pub fn has_shield(&self) -> bool {
        self.off_hand.as_ref().is_some_and(|i| i.shield)
    }

    /// Validates every equipped item against its slot rules.
    pub fn validate(&self) -> Result<(), crate::error::CoreError> {
        for item in self.iter_equipped() {
            item.validate()?;
        }
        Ok(())
    }
}
