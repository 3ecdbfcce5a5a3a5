//! Population-driven boss generation.
//!
//! Pure computation: given a player population, a balance config, and a
//! seed, produces the next boss. The caller persists the result as the new
//! active boss.

use crate::boss::{Boss, BossKind, BossTraits, DebuffSet};
use crate::config::BalanceConfig;
use crate::env::{RngOracle, compute_seed, roll};
use crate::state::{BossId, HitPoints};

/// Cosmetic name parts. Mechanics must never depend on the name.
const NAME_PREFIXES: [&str; 5] = ["Titan", "Lord", "Giga", "Ancient", "Cyber"];
const NAME_NOUNS: [&str; 5] = ["Sloth", "Gluttony", "Entropy", "Static", "Couch Potato"];

/// Cumulative thresholds for the single uniform archetype draw in [0, 1).
const KIND_ROLL_NORMAL: f64 = 0.40;
const KIND_ROLL_ARMORED: f64 = 0.55;
const KIND_ROLL_AGILE: f64 = 0.70;
const KIND_ROLL_RADIOACTIVE: f64 = 0.85;

/// Trait values fixed per archetype.
const ARMORED_REDUCTION: f64 = 0.5;
const AGILE_EVASION_PERCENT: u8 = 20;
const RADIOACTIVE_REGEN: f64 = 0.05;

/// HP adjustments applied after the base formula.
const ARMORED_HP_SCALE: f64 = 1.1;
const SWARM_HP_SCALE: f64 = 0.8;

/// Base HP scaled to the active player population.
///
/// `max_hp = max(min_boss_hp, round(population * avg_damage * workouts_per_week * difficulty))`
///
/// The population is clamped to >= 1 so the math never collapses on an
/// empty roster.
pub fn max_hp_for_population(population: u64, config: &BalanceConfig) -> u32 {
    let population = population.max(1);
    let target = population as f64
        * config.avg_damage_per_workout
        * config.workouts_per_week
        * config.difficulty;
    (target.round() as u32).max(config.min_boss_hp)
}

/// Total coin pool paid out when a boss with these stats dies.
///
/// Base is one coin per `pool_hp_divisor` HP; each difficulty trait adds an
/// independent, stacking multiplier bonus.
pub fn reward_pool(max_hp: u32, traits: &BossTraits, config: &BalanceConfig) -> u64 {
    let mut multiplier = 1.0;
    if traits.armor_reduction.is_some() {
        multiplier += config.pool_bonus_armor;
    }
    if traits.evasion_chance.is_some() {
        multiplier += config.pool_bonus_evasion;
    }
    if traits.regen_per_attack.is_some() {
        multiplier += config.pool_bonus_regen;
    }
    ((f64::from(max_hp) / config.pool_hp_divisor) * multiplier) as u64
}

/// Generates the next boss. Pure given the seed; no side effects.
pub fn generate_boss(
    id: BossId,
    population: u64,
    config: &BalanceConfig,
    rng: &dyn RngOracle,
    seed: u64,
) -> Boss {
    let draw = rng.unit(compute_seed(seed, 0, 0, roll::BOSS_KIND));

    let (kind, traits) = if draw < KIND_ROLL_NORMAL {
        (BossKind::Normal, BossTraits::default())
    } else if draw < KIND_ROLL_ARMORED {
        (
            BossKind::Armored,
            BossTraits {
                armor_reduction: Some(ARMORED_REDUCTION),
                ..BossTraits::default()
            },
        )
    } else if draw < KIND_ROLL_AGILE {
        (
            BossKind::Agile,
            BossTraits {
                evasion_chance: Some(AGILE_EVASION_PERCENT),
                ..BossTraits::default()
            },
        )
    } else if draw < KIND_ROLL_RADIOACTIVE {
        (
            BossKind::Radioactive,
            BossTraits {
                regen_per_attack: Some(RADIOACTIVE_REGEN),
                ..BossTraits::default()
            },
        )
    } else {
        (BossKind::Swarm, BossTraits::default())
    };

    let mut max_hp = max_hp_for_population(population, config);
    // Archetype HP adjustment comes after the base formula.
    max_hp = match kind {
        BossKind::Armored => (f64::from(max_hp) * ARMORED_HP_SCALE) as u32,
        BossKind::Swarm => (f64::from(max_hp) * SWARM_HP_SCALE) as u32,
        _ => max_hp,
    };

    let prefix = NAME_PREFIXES[rng.pick_index(
        compute_seed(seed, 0, 0, roll::NAME_PREFIX),
        NAME_PREFIXES.len(),
    )];
    let noun = NAME_NOUNS[rng.pick_index(
        compute_seed(seed, 0, 0, roll::NAME_NOUN),
        NAME_NOUNS.len(),
    )];
    let mut name = format!("{prefix} of {noun}");
    let suffix = kind.name_suffix();
    if !suffix.is_empty() {
        name.push(' ');
        name.push_str(suffix);
    }

    Boss {
        id,
        name,
        kind,
        traits,
        hp: HitPoints::new_full(max_hp),
        debuffs: DebuffSet::default(),
        active: true,
    }
}
