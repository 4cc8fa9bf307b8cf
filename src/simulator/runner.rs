//! Duel simulation runner driving full sessions through the public API.
//!
//! Every duel spawns fresh combatants from the two specs and advances the
//! session at the configured polling cadence, so results match what the
//! orchestration layer would see in production.

use super::config::SimConfig;
use super::report::{DuelStats, SimReport};
use crate::catalog::AbilityCatalog;
use crate::combat::session::CombatSession;
use crate::error::CoreError;
use crate::orchestrator::CombatantSpec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Runs `config.num_duels` PvP duels between the two specs.
pub fn run_duels(
    config: &SimConfig,
    catalog: &AbilityCatalog,
    side_a: &CombatantSpec,
    side_b: &CombatantSpec,
) -> Result<SimReport, CoreError> {
    let mut duels = Vec::with_capacity(config.num_duels as usize);

    for duel_idx in 0..config.num_duels {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + duel_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut session = CombatSession::pvp(side_a.spawn(catalog)?, side_b.spawn(catalog)?);

        let mut now = 0.0;
        while !session.is_resolved() && now < config.max_duel_seconds {
            session.advance(now, &mut rng);
            now += config.step_seconds;
        }

        let (experience, gold, drop_rarity) = session
            .rewards()
            .map(|r| {
                (
                    r.experience,
                    r.gold,
                    r.equipment.as_ref().map(|item| item.rarity),
                )
            })
            .unwrap_or((0, 0, None));

        let stats = DuelStats {
            winner_index: session.winner_index(),
            duration_seconds: session.elapsed(),
            log_lines: session.combat_log().len(),
            experience,
            gold,
            drop_rarity,
        };

        if config.verbosity >= 2 {
            println!(
                "duel {}/{}: winner={:?} duration={:.1}s",
                duel_idx + 1,
                config.num_duels,
                stats.winner_index,
                stats.duration_seconds
            );
        }
        duels.push(stats);
    }

    Ok(SimReport::from_duels(duels))
}
