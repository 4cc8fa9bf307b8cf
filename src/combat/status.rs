use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// Closed set of timed combat modifiers. Each kind carries one magnitude;
/// what the number means is fixed per kind, resolved through exhaustive
/// matches rather than string tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    /// True damage per second per stack.
    Poison,
    /// True damage per second per stack.
    Burn,
    /// Blocks auto-attacks and auto-abilities; DoTs still tick.
    Stun,
    /// Fractional attack-interval increase (0.3 = 30% slower swings).
    Slow,
    /// Fractional outgoing-damage increase on the holder.
    DamageBoost,
    /// Fractional incoming-damage increase on the holder.
    Vulnerability,
    /// Flat armor ignored by the holder's physical hits.
    ArmorPen,
}

impl StatusKind {
    pub fn is_dot(&self) -> bool {
        matches!(self, StatusKind::Poison | StatusKind::Burn)
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatusKind::Poison => "Poison",
            StatusKind::Burn => "Burn",
            StatusKind::Stun => "Stun",
            StatusKind::Slow => "Slow",
            StatusKind::DamageBoost => "Damage Boost",
            StatusKind::Vulnerability => "Vulnerability",
            StatusKind::ArmorPen => "Armor Pen",
        }
    }

    /// Stack cap used when an ability template does not override it.
    pub fn default_max_stacks(&self) -> u32 {
        match self {
            StatusKind::Poison | StatusKind::Burn => DOT_STACK_CAP,
            StatusKind::Stun => STUN_STACK_CAP,
            StatusKind::Slow => SLOW_STACK_CAP,
            StatusKind::DamageBoost | StatusKind::Vulnerability | StatusKind::ArmorPen => {
                BUFF_STACK_CAP
            }
        }
    }
}

/// One applied effect. Multiple instances of the same kind coexist up to
/// the kind's stack cap; the oldest is evicted beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusInstance {
    pub kind: StatusKind,
    pub magnitude: f64,
    pub applied_at: f64,
    pub expires_at: f64,
}

impl StatusInstance {
    pub fn active_at(&self, now: f64) -> bool {
        now < self.expires_at
    }
}

/// Ordered list of active effects on one combatant. Order is application
/// order, which makes oldest-first eviction a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveStatuses {
    effects: Vec<StatusInstance>,
}

impl ActiveStatuses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an instance, evicting the oldest of the same kind if the
    /// stack cap would be exceeded.
    pub fn apply(&mut self, instance: StatusInstance, max_stacks: u32) {
        let same_kind = self
            .effects
            .iter()
            .filter(|e| e.kind == instance.kind)
            .count() as u32;
        if same_kind >= max_stacks {
            if let Some(oldest) = self
                .effects
                .iter()
                .enumerate()
                .filter(|(_, e)| e.kind == instance.kind)
                .min_by(|(_, a), (_, b)| a.applied_at.total_cmp(&b.applied_at))
                .map(|(i, _)| i)
            {
                self.effects.remove(oldest);
            }
        }
        self.effects.push(instance);
    }

    /// Drops instances that have expired by `now`.
    pub fn prune_expired(&mut self, now: f64) {
        self.effects.retain(|e| e.active_at(now));
    }

    pub fn is_stunned(&self, now: f64) -> bool {
        self.effects
            .iter()
            .any(|e| e.kind == StatusKind::Stun && e.active_at(now))
    }

    /// Total true damage per second from all DoT stacks active at `now`,
    /// broken down by kind for logging.
    pub fn dot_per_second(&self, now: f64) -> Vec<(StatusKind, f64)> {
        let mut totals: Vec<(StatusKind, f64)> = Vec::new();
        for effect in self.effects.iter().filter(|e| e.kind.is_dot() && e.active_at(now)) {
            match totals.iter_mut().find(|(kind, _)| *kind == effect.kind) {
                Some((_, total)) => *total += effect.magnitude,
                None => totals.push((effect.kind, effect.magnitude)),
            }
        }
        totals
    }

    fn magnitude_sum(&self, kind: StatusKind, now: f64) -> f64 {
        self.effects
            .iter()
            .filter(|e| e.kind == kind && e.active_at(now))
            .map(|e| e.magnitude)
            .sum()
    }

    /// Fractional outgoing-damage bonus active at `now`.
    pub fn damage_boost(&self, now: f64) -> f64 {
        self.magnitude_sum(StatusKind::DamageBoost, now)
    }

    /// Fractional incoming-damage penalty active at `now`.
    pub fn vulnerability(&self, now: f64) -> f64 {
        self.magnitude_sum(StatusKind::Vulnerability, now)
    }

    /// Flat armor penetration active at `now`.
    pub fn armor_pen(&self, now: f64) -> f64 {
        self.magnitude_sum(StatusKind::ArmorPen, now)
    }

    /// Attack-interval multiplier from slows (1.0 = unaffected).
    pub fn attack_interval_factor(&self, now: f64) -> f64 {
        1.0 + self.magnitude_sum(StatusKind::Slow, now)
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusInstance> {
        self.effects.iter()
    }
}
