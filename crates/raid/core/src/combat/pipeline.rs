//! The per-attack damage pipeline.
//!
//! Evaluation order is part of the contract:
//! 1. upgrade input modifiers
//! 2. evasion check (short-circuits to a miss)
//! 3. sport base formula (crit + debuff proposals)
//! 4. player level factor
//! 5. upgrade damage modifiers, registration order, once each
//! 6. armor reduction while armor is intact
//! 7. synergy bonus once armor is broken
//! 8. truncate to integer, never negative

use std::collections::HashMap;

use crate::boss::{BossTraits, Debuff, DebuffSet};
use crate::combat::formula;
use crate::combat::AttackInput;
use crate::config::BalanceConfig;
use crate::env::{RngOracle, compute_seed, roll};
use crate::upgrade::UpgradeRegistry;

/// Result of one resolved attack.
///
/// Miss and crit are mutually exclusive; a missed attack carries no
/// debuff proposals and zero damage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub damage: u32,
    pub is_crit: bool,
    pub is_miss: bool,
    pub new_debuffs: DebuffSet,
}

impl AttackOutcome {
    fn miss() -> Self {
        Self {
            damage: 0,
            is_crit: false,
            is_miss: true,
            new_debuffs: DebuffSet::new(),
        }
    }
}

/// Resolves one attack submission against the boss's current traits and
/// debuffs. Deterministic given the seed.
///
/// `owned_upgrades` maps upgrade key to owned level; unknown keys are
/// silent no-ops (effect lookup misses are not errors).
#[allow(clippy::too_many_arguments)]
pub fn resolve_attack(
    input: &AttackInput,
    player_level: u32,
    boss_traits: &BossTraits,
    boss_debuffs: &DebuffSet,
    owned_upgrades: &HashMap<String, u8>,
    registry: &UpgradeRegistry,
    config: &BalanceConfig,
    rng: &dyn RngOracle,
    seed: u64,
) -> AttackOutcome {
    // 1. Input modifiers. Each upgrade touches a disjoint numeric field of
    //    its own sport, so application order does not matter here.
    let mut input = input.clone();
    for def in registry.iter() {
        if let Some(&level) = owned_upgrades.get(def.key()) {
            def.modify_input(level, &mut input);
        }
    }

    // 2. Evasion short-circuits everything else.
    if let Some(p) = boss_traits.evasion_chance
        && p > 0
        && rng.roll_d100(compute_seed(seed, 0, 0, roll::EVASION)) <= u32::from(p)
    {
        return AttackOutcome::miss();
    }

    // 3. Sport base formula.
    let base = formula::evaluate(&input, rng, seed);
    let mut damage = base.raw;

    // 4. Player level factor.
    damage *= 1.0 + f64::from(player_level) * config.level_damage_factor;

    // 5. Damage modifiers in registration order. The registry is iterated
    //    exactly once, so the super-upgrade doubling cannot compound.
    for def in registry.iter() {
        if let Some(&level) = owned_upgrades.get(def.key()) {
            damage = def.modify_damage(level, damage);
        }
    }

    // 6/7. Armor and synergy. Armor counts as broken whether the debuff
    // pre-exists or was proposed by this very attack.
    let armor_broken = boss_debuffs.contains(Debuff::ArmorBreak)
        || base.proposed_debuffs.contains(Debuff::ArmorBreak);
    if !armor_broken {
        if let Some(r) = boss_traits.armor_reduction
            && r > 0.0
        {
            damage *= 1.0 - r;
        }
    } else {
        // Rewards coordination regardless of whether the boss is armored.
        damage *= config.synergy_multiplier;
    }

    // 8. Truncate, never negative.
    AttackOutcome {
        damage: damage.max(0.0) as u32,
        is_crit: base.is_crit,
        is_miss: false,
        new_debuffs: base.proposed_debuffs,
    }
}

/// Convenience wrapper for attacks without upgrades, used by tests and
/// offline tools.
pub fn resolve_plain(
    input: &AttackInput,
    player_level: u32,
    boss_traits: &BossTraits,
    boss_debuffs: &DebuffSet,
    config: &BalanceConfig,
    rng: &dyn RngOracle,
    seed: u64,
) -> AttackOutcome {
    static EMPTY: std::sync::OnceLock<UpgradeRegistry> = std::sync::OnceLock::new();
    let registry = EMPTY.get_or_init(UpgradeRegistry::new);
    resolve_attack(
        input,
        player_level,
        boss_traits,
        boss_debuffs,
        &HashMap::new(),
        registry,
        config,
        rng,
        seed,
    )
}
