//! Command-line duel simulator.
//!
//! Usage: simulate [NUM_DUELS] [SEED]
//!
//! Runs a mirror sword duel batch by default and prints the aggregate
//! report. Useful for eyeballing balance after tuning constants.

use duelist::catalog::AbilityCatalog;
use duelist::character::attributes::{AttributeType, Attributes};
use duelist::items::equipment::Equipment;
use duelist::items::generation::generate_weapon;
use duelist::items::types::{Rarity, WeaponType};
use duelist::orchestrator::CombatantSpec;
use duelist::simulator::{run_duels, SimConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn reference_spec(name: &str) -> CombatantSpec {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut equipment = Equipment::new();
    equipment.main_hand = Some(generate_weapon(
        WeaponType::Sword,
        Rarity::Common,
        10,
        &mut rng,
    ));
    let mut attributes = Attributes::new();
    attributes.set(AttributeType::Might, 50);
    attributes.set(AttributeType::Vitality, 30);
    CombatantSpec {
        name: name.to_string(),
        level: 10,
        attributes,
        equipment,
        loadout: vec!["sword_crosscut".to_string(), "sword_riposte".to_string()],
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let num_duels: u32 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1000);
    let seed: Option<u64> = args.next().and_then(|arg| arg.parse().ok());

    let config = SimConfig {
        num_duels,
        seed,
        ..SimConfig::default()
    };

    let catalog = AbilityCatalog::builtin();
    let side_a = reference_spec("Kael");
    let side_b = reference_spec("Vex");

    match run_duels(&config, &catalog, &side_a, &side_b) {
        Ok(report) => report.print_summary(),
        Err(err) => {
            eprintln!("simulation failed: {err}");
            std::process::exit(1);
        }
    }
}
