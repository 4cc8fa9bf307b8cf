use crate::core::constants::NUM_ATTRIBUTES;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttributeType {
    Might,
    Agility,
    Vitality,
    Intellect,
    Wisdom,
    Charisma,
}

impl AttributeType {
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Might,
            AttributeType::Agility,
            AttributeType::Vitality,
            AttributeType::Intellect,
            AttributeType::Wisdom,
            AttributeType::Charisma,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            AttributeType::Might => "MGT",
            AttributeType::Agility => "AGI",
            AttributeType::Vitality => "VIT",
            AttributeType::Intellect => "INT",
            AttributeType::Wisdom => "WIS",
            AttributeType::Charisma => "CHA",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeType::Might => 0,
            AttributeType::Agility => 1,
            AttributeType::Vitality => 2,
            AttributeType::Intellect => 3,
            AttributeType::Wisdom => 4,
            AttributeType::Charisma => 5,
        }
    }
}

/// A character's player-allocated base attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Attributes {
    values: [u32; NUM_ATTRIBUTES],
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes {
    pub fn new() -> Self {
        Self {
            values: [10; NUM_ATTRIBUTES],
        }
    }

    pub fn get(&self, attr: AttributeType) -> u32 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: AttributeType, value: u32) {
        self.values[attr.index()] = value;
    }

    /// Adds another Attributes' values to this one (for equipment bonuses).
    pub fn add(&mut self, other: &Attributes) {
        for attr in AttributeType::all() {
            self.values[attr.index()] = self.values[attr.index()].saturating_add(other.get(attr));
        }
    }

    /// Creates Attributes from individual values (zero-based, not the 10 default).
    pub fn from_values(
        might: u32,
        agility: u32,
        vitality: u32,
        intellect: u32,
        wisdom: u32,
        charisma: u32,
    ) -> Self {
        Self {
            values: [might, agility, vitality, intellect, wisdom, charisma],
        }
    }
}
