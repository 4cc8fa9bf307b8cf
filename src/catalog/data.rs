//! Builtin reference abilities: two regular and one ultimate per weapon type.

use super::{AbilityDefinition, StatusTarget, StatusTemplate};
use crate::combat::status::StatusKind;
use crate::items::types::{DamageType, WeaponType};

fn ability(
    id: &str,
    name: &str,
    weapon: WeaponType,
    damage_multiplier: f64,
    hits: u32,
    cooldown: f64,
    mana_cost: f64,
) -> AbilityDefinition {
    AbilityDefinition {
        id: id.to_string(),
        name: name.to_string(),
        weapon,
        damage_type: weapon.damage_type(),
        damage_multiplier,
        hits,
        cooldown,
        mana_cost,
        is_ultimate: false,
        crit_multiplier: None,
        armor_pen: 0.0,
        statuses: Vec::new(),
    }
}

fn status(
    kind: StatusKind,
    magnitude: f64,
    duration: f64,
    chance: f64,
    target: StatusTarget,
) -> StatusTemplate {
    StatusTemplate {
        kind,
        magnitude,
        duration,
        chance,
        target,
        max_stacks: None,
        area: false,
    }
}

pub fn builtin_abilities() -> Vec<AbilityDefinition> {
    use StatusKind::*;
    use StatusTarget::*;
    use WeaponType::*;

    let mut defs = Vec::new();

    // ── Sword ────────────────────────────────────────────────────────────
    defs.push(ability("sword_crosscut", "Crosscut", Sword, 1.4, 2, 6.0, 20.0));
    let mut riposte = ability("sword_riposte", "Riposte", Sword, 1.8, 1, 10.0, 30.0);
    riposte.statuses = vec![status(DamageBoost, 0.15, 6.0, 1.0, Caster)];
    defs.push(riposte);
    let mut bladestorm = ability("sword_bladestorm", "Bladestorm", Sword, 1.2, 4, 30.0, 60.0);
    bladestorm.is_ultimate = true;
    defs.push(bladestorm);

    // ── Axe ──────────────────────────────────────────────────────────────
    let mut cleave = ability("axe_cleave", "Cleave", Axe, 1.6, 1, 8.0, 25.0);
    cleave.statuses = vec![status(Vulnerability, 0.10, 5.0, 0.5, Enemy)];
    defs.push(cleave);
    let mut sunder = ability("axe_sunder", "Sunder", Axe, 1.3, 1, 12.0, 30.0);
    sunder.armor_pen = 10.0;
    sunder.statuses = vec![status(ArmorPen, 15.0, 8.0, 1.0, Caster)];
    defs.push(sunder);
    let mut executioner = ability("axe_executioner", "Executioner", Axe, 2.5, 1, 45.0, 80.0);
    executioner.is_ultimate = true;
    executioner.crit_multiplier = Some(2.5);
    defs.push(executioner);

    // ── Dagger ───────────────────────────────────────────────────────────
    let mut envenom = ability("dagger_envenom", "Envenom", Dagger, 1.1, 1, 5.0, 15.0);
    envenom.statuses = vec![status(Poison, 4.0, 6.0, 0.8, Enemy)];
    defs.push(envenom);
    defs.push(ability("dagger_fan", "Fan of Blades", Dagger, 0.9, 3, 9.0, 25.0));
    let mut deathmark = ability("dagger_deathmark", "Deathmark", Dagger, 1.8, 2, 40.0, 70.0);
    deathmark.is_ultimate = true;
    deathmark.statuses = vec![status(Vulnerability, 0.20, 6.0, 1.0, Enemy)];
    defs.push(deathmark);

    // ── Mace ─────────────────────────────────────────────────────────────
    let mut skullcrack = ability("mace_skullcrack", "Skullcrack", Mace, 1.5, 1, 10.0, 30.0);
    skullcrack.statuses = vec![status(Stun, 0.0, 1.5, 0.35, Enemy)];
    defs.push(skullcrack);
    let mut warcry = ability("mace_warcry", "War Cry", Mace, 0.8, 1, 12.0, 20.0);
    warcry.statuses = vec![status(DamageBoost, 0.10, 8.0, 1.0, Caster)];
    defs.push(warcry);
    let mut earthbreaker = ability("mace_earthbreaker", "Earthbreaker", Mace, 2.2, 1, 45.0, 85.0);
    earthbreaker.is_ultimate = true;
    earthbreaker.statuses = vec![status(Stun, 0.0, 2.5, 1.0, Enemy)];
    defs.push(earthbreaker);

    // ── Staff ────────────────────────────────────────────────────────────
    let mut scorch = ability("staff_scorch", "Scorch", Staff, 1.5, 1, 6.0, 25.0);
    scorch.damage_type = DamageType::Magical;
    scorch.statuses = vec![status(Burn, 5.0, 4.0, 0.75, Enemy)];
    defs.push(scorch);
    let mut frostgrasp = ability("staff_frostgrasp", "Frostgrasp", Staff, 1.2, 1, 9.0, 30.0);
    frostgrasp.statuses = vec![status(Slow, 0.3, 5.0, 0.9, Enemy)];
    defs.push(frostgrasp);
    let mut cataclysm = ability("staff_cataclysm", "Cataclysm", Staff, 2.8, 1, 50.0, 100.0);
    cataclysm.is_ultimate = true;
    let mut firestorm = status(Burn, 8.0, 6.0, 1.0, Enemy);
    firestorm.area = true;
    cataclysm.statuses = vec![firestorm];
    defs.push(cataclysm);

    defs
}
