// Character attributes
pub const NUM_ATTRIBUTES: usize = 6;

// Derived stat formulas
pub const BASE_HP: f64 = 100.0;
pub const HP_PER_MIGHT: f64 = 2.0;
pub const HP_PER_VITALITY: f64 = 12.0;
pub const BASE_MANA: f64 = 50.0;
pub const MANA_PER_INTELLECT: f64 = 10.0;
pub const MANA_PER_WISDOM: f64 = 5.0;
pub const BASE_MANA_REGEN_PER_SEC: f64 = 1.0;
pub const MANA_REGEN_PER_WISDOM: f64 = 0.1;
pub const ATTACK_POWER_PER_MIGHT: f64 = 2.0;
pub const ATTACK_POWER_PER_AGILITY: f64 = 1.0;
pub const SPELL_POWER_PER_INTELLECT: f64 = 2.0;
pub const SPELL_POWER_PER_WISDOM: f64 = 1.0;
pub const DEFENSE_PER_VITALITY: f64 = 1.5;
pub const RESIST_PER_WISDOM: f64 = 1.0;
pub const RESIST_PER_VITALITY: f64 = 0.5;

// Avoidance and crit, as fractions in [0, 1]
pub const BASE_CRIT_CHANCE: f64 = 0.05;
pub const CRIT_PER_AGILITY: f64 = 0.003;
pub const CRIT_PER_INTELLECT: f64 = 0.001;
pub const CRIT_CHANCE_CAP: f64 = 0.50;
pub const BASE_DODGE_CHANCE: f64 = 0.02;
pub const DODGE_PER_AGILITY: f64 = 0.002;
pub const DODGE_PER_WISDOM: f64 = 0.001;
pub const DODGE_CHANCE_CAP: f64 = 0.25;
pub const BASE_PARRY_CHANCE: f64 = 0.01;
pub const PARRY_PER_MIGHT: f64 = 0.001;
pub const PARRY_PER_VITALITY: f64 = 0.001;
pub const PARRY_CHANCE_CAP: f64 = 0.15;

// Dual wield and shield
pub const OFFHAND_ATTACK_FACTOR: f64 = 0.75;
pub const DUAL_WIELD_DAMAGE_FACTOR: f64 = 0.70;
pub const DUAL_WIELD_SPEED_FACTOR: f64 = 0.80;
pub const SHIELD_DEFENSE_FACTOR: f64 = 1.15;

// Hit resolution
pub const AUTO_ATTACK_CRIT_MULTIPLIER: f64 = 1.5;
pub const ABILITY_CRIT_MULTIPLIER: f64 = 2.0;
pub const DAMAGE_VARIANCE_MIN: f64 = 0.5;
pub const DAMAGE_VARIANCE_MAX: f64 = 1.0;
pub const DAMAGE_FLOOR_FRACTION: f64 = 0.10;
pub const RESIST_CURVE_CONSTANT: f64 = 100.0;

// Weapon data: (attack interval seconds, base attack at item level 10)
// Indexed by WeaponType order: Sword, Axe, Dagger, Mace, Staff
pub const WEAPON_STATS: [(f64, f64); 5] = [
    (2.0, 15.0), // Sword
    (2.6, 18.0), // Axe
    (1.4, 11.0), // Dagger
    (2.8, 19.0), // Mace
    (2.4, 15.0), // Staff
];
pub const UNARMED_ATTACK_INTERVAL: f64 = 2.5;

// Item generation
pub const NUM_EQUIPMENT_SLOTS: u32 = 7;
pub const ILVL_SCALING_BASE: f64 = 10.0;
pub const ILVL_SCALING_DIVISOR: f64 = 30.0;
pub const ARMOR_VALUE_PER_ILVL: f64 = 1.2;
pub const SHIELD_ARMOR_FACTOR: f64 = 1.5;

// Status effects: default stack caps per kind
pub const DOT_STACK_CAP: u32 = 3;
pub const SLOW_STACK_CAP: u32 = 2;
pub const BUFF_STACK_CAP: u32 = 2;
pub const STUN_STACK_CAP: u32 = 1;

// Rewards: PvP experience and gold scaling
pub const PVP_XP_BASE: u64 = 50;
pub const PVP_XP_PER_LEVEL: u64 = 5;
pub const PVP_LEVEL_SCALING_STEP: f64 = 0.1;
pub const PVP_LEVEL_SCALING_FLOOR: f64 = 0.1;
pub const MIN_XP_REWARD: u64 = 1;
pub const PVP_GOLD_BASE: u64 = 25;
pub const PVP_GOLD_PER_LEVEL: u64 = 3;
pub const PVP_DROP_CHANCE: f64 = 0.10;

// Rewards: rarity level gates (policy defaults, overridable via RewardConfig)
pub const LEGENDARY_LEVEL_GATE: u32 = 75;
pub const MYTHIC_LEVEL_GATE: u32 = 95;

// PvE rarity distribution thresholds (capped at Rare)
pub const PVE_RARITY_COMMON_THRESHOLD: f64 = 0.60;
pub const PVE_RARITY_UNCOMMON_THRESHOLD: f64 = 0.90;

// PvP rarity distribution thresholds
pub const PVP_RARITY_COMMON_THRESHOLD: f64 = 0.40;
pub const PVP_RARITY_UNCOMMON_THRESHOLD: f64 = 0.70;
pub const PVP_RARITY_RARE_THRESHOLD: f64 = 0.90;
pub const PVP_RARITY_EPIC_THRESHOLD: f64 = 0.975;
pub const PVP_RARITY_LEGENDARY_THRESHOLD: f64 = 0.995;
// Mythic is the remainder

// Orchestrator
pub const AUTO_FIGHT_MAX_SESSION_SECONDS: f64 = 600.0;
