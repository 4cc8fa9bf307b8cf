//! Aggregated duel-simulation results.

use crate::items::types::Rarity;
use std::collections::HashMap;

/// Outcome of one simulated duel.
#[derive(Debug, Clone)]
pub struct DuelStats {
    pub winner_index: Option<usize>,
    pub duration_seconds: f64,
    pub log_lines: usize,
    pub experience: u64,
    pub gold: u64,
    pub drop_rarity: Option<Rarity>,
}

/// Aggregated results over a batch of duels.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_duels: u32,
    pub resolved: u32,
    pub timed_out: u32,
    pub side_a_wins: u32,
    pub side_b_wins: u32,
    pub avg_duration_seconds: f64,
    pub avg_log_lines: f64,
    pub total_experience: u64,
    pub total_gold: u64,
    pub drops_by_rarity: HashMap<Rarity, u32>,
    pub duels: Vec<DuelStats>,
}

impl SimReport {
    pub fn from_duels(duels: Vec<DuelStats>) -> Self {
        let num_duels = duels.len() as u32;
        let resolved = duels.iter().filter(|d| d.winner_index.is_some()).count() as u32;
        let timed_out = num_duels - resolved;
        let side_a_wins = duels.iter().filter(|d| d.winner_index == Some(0)).count() as u32;
        let side_b_wins = duels.iter().filter(|d| d.winner_index == Some(1)).count() as u32;

        let avg_duration_seconds = if resolved > 0 {
            duels
                .iter()
                .filter(|d| d.winner_index.is_some())
                .map(|d| d.duration_seconds)
                .sum::<f64>()
                / resolved as f64
        } else {
            0.0
        };
        let avg_log_lines = if num_duels > 0 {
            duels.iter().map(|d| d.log_lines as f64).sum::<f64>() / num_duels as f64
        } else {
            0.0
        };

        let total_experience = duels.iter().map(|d| d.experience).sum();
        let total_gold = duels.iter().map(|d| d.gold).sum();

        let mut drops_by_rarity = HashMap::new();
        for duel in &duels {
            if let Some(rarity) = duel.drop_rarity {
                *drops_by_rarity.entry(rarity).or_insert(0) += 1;
            }
        }

        Self {
            num_duels,
            resolved,
            timed_out,
            side_a_wins,
            side_b_wins,
            avg_duration_seconds,
            avg_log_lines,
            total_experience,
            total_gold,
            drops_by_rarity,
            duels,
        }
    }

    /// Side A's win rate among resolved duels.
    pub fn side_a_win_rate(&self) -> f64 {
        if self.resolved == 0 {
            0.0
        } else {
            self.side_a_wins as f64 / self.resolved as f64
        }
    }

    pub fn print_summary(&self) {
        println!("── Duel simulation ──────────────────────────");
        println!("duels:        {}", self.num_duels);
        println!(
            "resolved:     {} ({} timed out)",
            self.resolved, self.timed_out
        );
        println!(
            "wins:         A {} / B {} ({:.1}% A)",
            self.side_a_wins,
            self.side_b_wins,
            self.side_a_win_rate() * 100.0
        );
        println!("avg duration: {:.1}s", self.avg_duration_seconds);
        println!("avg log size: {:.0} lines", self.avg_log_lines);
        println!(
            "rewards:      {} xp, {} gold",
            self.total_experience, self.total_gold
        );
        if !self.drops_by_rarity.is_empty() {
            let mut rarities: Vec<_> = self.drops_by_rarity.iter().collect();
            rarities.sort_by_key(|(rarity, _)| **rarity);
            let drops: Vec<String> = rarities
                .iter()
                .map(|(rarity, count)| format!("{} x{}", rarity.name(), count))
                .collect();
            println!("drops:        {}", drops.join(", "));
        }
    }
}
