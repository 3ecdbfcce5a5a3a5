//! Boss model: archetypes, immutable traits, accumulated debuffs, and the
//! population-driven generator.
mod generator;
mod kind;

pub use generator::{generate_boss, max_hp_for_population, reward_pool};
pub use kind::{BossKind, BossTraits, Debuff, DebuffSet};

use crate::config::BalanceConfig;
use crate::state::{BossId, HitPoints};

/// One boss instance. At most one boss is active system-wide; the storage
/// layer enforces this by holding a single active slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boss {
    pub id: BossId,
    pub name: String,
    pub kind: BossKind,
    /// Immutable after creation.
    pub traits: BossTraits,
    pub hp: HitPoints,
    /// Grow-only set of player-inflicted conditions.
    pub debuffs: DebuffSet,
    pub active: bool,
}

impl Boss {
    /// Regenerates HP for a radioactive boss.
    ///
    /// Triggers once per incoming attack (not on a wall-clock schedule),
    /// heals `floor(max_hp * regen_per_attack)` capped at the maximum, and
    /// only while the boss is still alive. Returns the amount healed.
    pub fn apply_regen(&mut self, config: &BalanceConfig) -> u32 {
        if self.traits.regen_per_attack.is_none() || self.hp.is_depleted() {
            return 0;
        }
        let heal = (f64::from(self.hp.maximum()) * config.regen_per_attack) as u32;
        let before = self.hp.current();
        self.hp.heal(heal);
        self.hp.current() - before
    }

    /// Applies damage, flooring HP at zero.
    pub fn apply_damage(&mut self, damage: u32) {
        self.hp.damage(damage);
    }

    /// Merges newly proposed debuffs into the accumulated set (union;
    /// existing debuffs are never removed).
    pub fn merge_debuffs(&mut self, proposed: &DebuffSet) {
        self.debuffs.merge(proposed);
    }

    /// True once HP has reached exactly zero.
    pub fn is_defeated(&self) -> bool {
        self.hp.is_depleted()
    }

    /// True if the armor break condition has been inflicted.
    pub fn armor_broken(&self) -> bool {
        self.debuffs.contains(Debuff::ArmorBreak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radioactive(max_hp: u32, current: u32) -> Boss {
        Boss {
            id: BossId(1),
            name: "Test of Entropy the Toxic".into(),
            kind: BossKind::Radioactive,
            traits: BossTraits {
                regen_per_attack: Some(0.05),
                ..BossTraits::default()
            },
            hp: HitPoints::new(current, max_hp),
            debuffs: DebuffSet::default(),
            active: true,
        }
    }

    #[test]
    fn regen_heals_half_percent_of_max() {
        let config = BalanceConfig::default();
        let mut boss = radioactive(10_000, 5000);
        let healed = boss.apply_regen(&config);
        assert_eq!(healed, 50); // floor(10000 * 0.005)
        assert_eq!(boss.hp.current(), 5050);
    }

    #[test]
    fn regen_caps_at_maximum() {
        let config = BalanceConfig::default();
        let mut boss = radioactive(10_000, 9990);
        let healed = boss.apply_regen(&config);
        assert_eq!(healed, 10);
        assert_eq!(boss.hp.current(), 10_000);
    }

    #[test]
    fn regen_skips_dead_boss() {
        let config = BalanceConfig::default();
        let mut boss = radioactive(10_000, 0);
        assert_eq!(boss.apply_regen(&config), 0);
        assert_eq!(boss.hp.current(), 0);
    }

    #[test]
    fn regen_skips_boss_without_trait() {
        let config = BalanceConfig::default();
        let mut boss = radioactive(10_000, 5000);
        boss.traits.regen_per_attack = None;
        assert_eq!(boss.apply_regen(&config), 0);
    }

    #[test]
    fn debuff_merge_is_grow_only() {
        let mut boss = radioactive(1000, 1000);
        let mut proposed = DebuffSet::default();
        proposed.insert(Debuff::ArmorBreak);
        boss.merge_debuffs(&proposed);
        assert!(boss.armor_broken());

        // Merging an empty set must not clear anything.
        boss.merge_debuffs(&DebuffSet::default());
        assert!(boss.armor_broken());
    }
}
