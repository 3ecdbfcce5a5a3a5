//! Sport-specific base damage formulas.
//!
//! Each sport dispatches through a pure rule record (base formula plus
//! optional crit and debuff rules) rather than virtual dispatch. All rolls
//! derive from the attack seed with distinct contexts.

use crate::boss::{Debuff, DebuffSet};
use crate::combat::{AttackInput, SportKind};
use crate::env::{RngOracle, compute_seed, roll};

/// Result of the sport base formula, before level/upgrade/armor scaling.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseDamage {
    pub raw: f64,
    pub is_crit: bool,
    pub proposed_debuffs: DebuffSet,
}

/// Crit rule: chance in percent, boosted above a duration threshold.
#[derive(Clone, Copy, Debug)]
struct CritRule {
    base_chance: u32,
    boosted_chance: u32,
    boost_over_minutes: u32,
    multiplier: f64,
}

/// Pure per-sport rule record.
#[derive(Clone, Copy, Debug)]
struct SportRule {
    base: fn(&AttackInput) -> f64,
    /// Percent chance to propose an armor break, rolled once per attack.
    armor_break_chance: u32,
    crit: Option<CritRule>,
}

fn run_base(input: &AttackInput) -> f64 {
    let mut damage = input.distance_km * 75.0 + f64::from(input.duration_minutes);
    if input.duration_minutes < 30 {
        damage *= 0.8;
    }
    if input.distance_km > 5.0 {
        damage *= 1.1;
    }
    damage
}

fn cycle_base(input: &AttackInput) -> f64 {
    30.0 * input.distance_km + f64::from(input.duration_minutes)
}

fn swim_base(input: &AttackInput) -> f64 {
    input.distance_km * 1000.0 / 2.0
}

fn football_base(input: &AttackInput) -> f64 {
    f64::from(input.calories) / 2.0
}

const fn rule_for(sport: SportKind) -> SportRule {
    match sport {
        SportKind::Run => SportRule {
            base: run_base,
            armor_break_chance: 0,
            crit: None,
        },
        SportKind::Cycle => SportRule {
            base: cycle_base,
            armor_break_chance: 0,
            crit: None,
        },
        SportKind::Swim => SportRule {
            base: swim_base,
            armor_break_chance: 30,
            crit: None,
        },
        SportKind::Football => SportRule {
            base: football_base,
            armor_break_chance: 30,
            crit: Some(CritRule {
                base_chance: 10,
                boosted_chance: 50,
                boost_over_minutes: 90,
                multiplier: 2.5,
            }),
        },
    }
}

/// Evaluates the sport base formula, crit rule, and debuff proposal.
pub(crate) fn evaluate(input: &AttackInput, rng: &dyn RngOracle, seed: u64) -> BaseDamage {
    let rule = rule_for(input.sport);
    let mut raw = (rule.base)(input);
    let mut is_crit = false;

    if let Some(crit) = rule.crit {
        let chance = if input.duration_minutes > crit.boost_over_minutes {
            crit.boosted_chance
        } else {
            crit.base_chance
        };
        if rng.roll_d100(compute_seed(seed, 0, 0, roll::CRIT)) <= chance {
            is_crit = true;
            raw *= crit.multiplier;
        }
    }

    let mut proposed_debuffs = DebuffSet::new();
    if rule.armor_break_chance > 0
        && rng.roll_d100(compute_seed(seed, 0, 0, roll::DEBUFF)) <= rule.armor_break_chance
    {
        proposed_debuffs.insert(Debuff::ArmorBreak);
    }

    BaseDamage {
        raw,
        is_crit,
        proposed_debuffs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stub oracle yielding a fixed d100 roll (value - 1 modulo 100).
    struct FixedRoll(u32);

    impl RngOracle for FixedRoll {
        fn next_u32(&self, _seed: u64) -> u32 {
            self.0 - 1
        }
    }

    #[test]
    fn run_formula_applies_both_adjustments() {
        // 6 km, 25 min: (6*75 + 25) * 0.8 (short) * 1.1 (long distance)
        let input = AttackInput::new(SportKind::Run)
            .with_distance(6.0)
            .with_duration(25);
        let expected = (6.0 * 75.0 + 25.0) * 0.8 * 1.1;
        assert_eq!(run_base(&input), expected);
    }

    #[test]
    fn run_formula_without_adjustments() {
        let input = AttackInput::new(SportKind::Run)
            .with_distance(3.0)
            .with_duration(40);
        assert_eq!(run_base(&input), 3.0 * 75.0 + 40.0);
    }

    #[test]
    fn cycle_formula_is_linear() {
        let input = AttackInput::new(SportKind::Cycle)
            .with_distance(2.0)
            .with_duration(40);
        assert_eq!(cycle_base(&input), 100.0);
    }

    #[test]
    fn swim_formula_halves_meters() {
        let input = AttackInput::new(SportKind::Swim).with_distance(1.5);
        assert_eq!(swim_base(&input), 750.0);
    }

    #[test]
    fn football_formula_halves_calories() {
        let input = AttackInput::new(SportKind::Football).with_calories(500);
        assert_eq!(football_base(&input), 250.0);
    }

    #[test]
    fn swim_proposes_armor_break_when_roll_lands() {
        let input = AttackInput::new(SportKind::Swim).with_distance(1.0);
        let hit = evaluate(&input, &FixedRoll(30), 0);
        assert!(hit.proposed_debuffs.contains(Debuff::ArmorBreak));

        let missed = evaluate(&input, &FixedRoll(31), 0);
        assert!(missed.proposed_debuffs.is_empty());
    }

    #[test]
    fn football_crit_multiplies_by_two_and_a_half() {
        let input = AttackInput::new(SportKind::Football)
            .with_calories(400)
            .with_duration(30);
        let crit = evaluate(&input, &FixedRoll(10), 0);
        assert!(crit.is_crit);
        assert_eq!(crit.raw, 200.0 * 2.5);

        let normal = evaluate(&input, &FixedRoll(11), 0);
        assert!(!normal.is_crit);
        assert_eq!(normal.raw, 200.0);
    }

    #[test]
    fn football_long_match_boosts_crit_chance() {
        let input = AttackInput::new(SportKind::Football)
            .with_calories(400)
            .with_duration(91);
        // Roll of 50 crits only under the boosted chance.
        let boosted = evaluate(&input, &FixedRoll(50), 0);
        assert!(boosted.is_crit);

        let short = AttackInput::new(SportKind::Football)
            .with_calories(400)
            .with_duration(90);
        let not_boosted = evaluate(&short, &FixedRoll(50), 0);
        assert!(!not_boosted.is_crit);
    }

    #[test]
    fn run_and_cycle_never_crit_or_debuff() {
        for sport in [SportKind::Run, SportKind::Cycle] {
            let input = AttackInput::new(sport).with_distance(1.0).with_duration(10);
            let result = evaluate(&input, &FixedRoll(1), 0);
            assert!(!result.is_crit);
            assert!(result.proposed_debuffs.is_empty());
        }
    }
}
