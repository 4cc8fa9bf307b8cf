//! Session orchestration: polling-friendly advance, unattended auto-fight
//! supervision, and the session store owned by the embedding layer.

#![allow(unused_imports)]

pub mod store;

pub use store::*;

use crate::catalog::AbilityCatalog;
use crate::character::attributes::Attributes;
use crate::combat::combatant::Combatant;
use crate::combat::session::CombatSession;
use crate::core::constants::AUTO_FIGHT_MAX_SESSION_SECONDS;
use crate::error::CoreError;
use crate::items::equipment::Equipment;
use crate::items::types::Item;
use crate::rewards::EnemyRewards;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Current wall-clock time on the engine's f64-seconds axis.
pub fn wall_clock_seconds() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

/// Advances a session to `now`. Prefer this over calling the session
/// directly when polling: already-resolved sessions are skipped instead of
/// tripping the resolved-session invariant.
pub fn advance_session(session: &mut CombatSession, now: f64, rng: &mut impl Rng) {
    if session.is_resolved() {
        return;
    }
    session.advance(now, rng);
}

/// A reusable combatant blueprint. Auto-fight burns through many sessions
/// against the same target, each needing a fresh Combatant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantSpec {
    pub name: String,
    pub level: u32,
    pub attributes: Attributes,
    pub equipment: Equipment,
    pub loadout: Vec<String>,
}

impl CombatantSpec {
    pub fn spawn(&self, catalog: &AbilityCatalog) -> Result<Combatant, CoreError> {
        Combatant::new(
            self.name.clone(),
            self.level,
            self.attributes,
            self.equipment.clone(),
            self.loadout.clone(),
            catalog,
        )
    }
}

/// Rewards accumulated across an auto-fight run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoFightReport {
    pub sessions_resolved: u32,
    pub wins: u32,
    pub losses: u32,
    /// Sessions abandoned for exceeding the per-session time cap.
    pub stalemates: u32,
    pub experience: u64,
    pub gold: u64,
    pub items: Vec<Item>,
}

/// Unattended grind mode: fresh sessions against the same PvE target until
/// the wall-clock deadline, rewards accumulated across every resolved fight
/// and applied by the caller once at the end.
#[derive(Debug)]
pub struct AutoFight {
    player: CombatantSpec,
    enemy: CombatantSpec,
    enemy_rewards: EnemyRewards,
    deadline: f64,
    session_time_cap: f64,
    current: Option<CombatSession>,
    current_started: f64,
    report: AutoFightReport,
    finished: bool,
}

impl AutoFight {
    pub fn new(
        player: CombatantSpec,
        enemy: CombatantSpec,
        enemy_rewards: EnemyRewards,
        deadline: f64,
    ) -> Self {
        Self {
            player,
            enemy,
            enemy_rewards,
            deadline,
            session_time_cap: AUTO_FIGHT_MAX_SESSION_SECONDS,
            current: None,
            current_started: 0.0,
            report: AutoFightReport::default(),
            finished: false,
        }
    }

    /// Overrides the per-session stalemate cap.
    pub fn with_session_time_cap(mut self, cap: f64) -> Self {
        self.session_time_cap = cap;
        self
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn report(&self) -> &AutoFightReport {
        &self.report
    }

    /// Drives the run forward to `now`. Call at any cadence; past the
    /// deadline the run finishes and any unresolved fight is abandoned.
    pub fn advance(
        &mut self,
        now: f64,
        catalog: &AbilityCatalog,
        rng: &mut impl Rng,
    ) -> Result<(), CoreError> {
        if self.finished {
            return Ok(());
        }
        if now >= self.deadline {
            if self.current.take().is_some() {
                log::debug!("auto-fight: abandoning unresolved session at deadline");
            }
            self.finished = true;
            return Ok(());
        }

        if self.current.is_none() {
            let player = self.player.spawn(catalog)?;
            let enemy = self.enemy.spawn(catalog)?;
            self.current = Some(CombatSession::pve(
                player,
                enemy,
                self.enemy_rewards.clone(),
            ));
            self.current_started = now;
        }

        let session = self.current.as_mut().expect("spawned above");
        session.advance(now, rng);

        if session.is_resolved() {
            self.report.sessions_resolved += 1;
            if session.winner_index() == Some(0) {
                self.report.wins += 1;
                if let Some(rewards) = session.rewards() {
                    self.report.experience += rewards.experience;
                    self.report.gold += rewards.gold;
                    if let Some(item) = rewards.equipment.clone() {
                        self.report.items.push(item);
                    }
                }
            } else {
                self.report.losses += 1;
            }
            self.current = None;
        } else if now - self.current_started > self.session_time_cap {
            log::warn!(
                "auto-fight: session exceeded {:.0}s cap, abandoning",
                self.session_time_cap
            );
            self.report.stalemates += 1;
            self.current = None;
        }
        Ok(())
    }
}
