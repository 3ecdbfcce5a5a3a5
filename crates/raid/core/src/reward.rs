//! Reward pool splitting.
//!
//! When a boss dies its coin pool is divided among everyone who damaged it,
//! proportional to total damage dealt. Shares are floored; the remainder is
//! burned rather than redistributed.

use std::collections::BTreeMap;

use crate::state::{AttackRecord, BossId, PlayerId};

/// One player's share of a dead boss's pool.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Payout {
    pub player: PlayerId,
    pub amount: u64,
}

/// Per-player damage totals against a single boss.
///
/// Backed by a `BTreeMap` so payout order is deterministic by player id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DamageLedger {
    totals: BTreeMap<PlayerId, u64>,
}

impl DamageLedger {
    /// Tallies damage from a durable attack log, counting only records for
    /// the given boss. Misses contribute zero and earn no share.
    pub fn from_records<'a>(
        boss: BossId,
        records: impl IntoIterator<Item = &'a AttackRecord>,
    ) -> Self {
        let mut ledger = Self::default();
        for record in records {
            if record.boss == boss && record.damage > 0 {
                ledger.add(record.player, u64::from(record.damage));
            }
        }
        ledger
    }

    pub fn add(&mut self, player: PlayerId, damage: u64) {
        *self.totals.entry(player).or_default() += damage;
    }

    pub fn total(&self) -> u64 {
        self.totals.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, u64)> + '_ {
        self.totals.iter().map(|(&p, &d)| (p, d))
    }
}

/// Splits a pool proportionally to ledger damage, flooring each share.
///
/// An empty or all-zero ledger yields no payouts. Intermediate math runs in
/// u128 so `pool * damage` cannot overflow.
pub fn split_pool(total_pool: u64, ledger: &DamageLedger) -> Vec<Payout> {
    let total_damage = ledger.total();
    if total_damage == 0 {
        return Vec::new();
    }
    ledger
        .iter()
        .map(|(player, damage)| Payout {
            player,
            amount: (u128::from(total_pool) * u128::from(damage) / u128::from(total_damage))
                as u64,
        })
        .collect()
}
