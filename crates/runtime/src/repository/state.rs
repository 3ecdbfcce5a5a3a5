//! The complete mutable state of a raid session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use raid_core::reward::DamageLedger;
use raid_core::state::{AttackRecord, BossId, PlayerId, PlayerProgress};
use raid_core::Boss;

/// Everything the raid mutates, committed atomically as one value.
///
/// The attack log is append-only and is the source of truth for reward
/// splitting; per-player damage is never cached separately.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RaidState {
    /// The single active boss slot. `None` only before the first spawn.
    pub active_boss: Option<Boss>,
    pub players: BTreeMap<PlayerId, PlayerProgress>,
    pub logs: Vec<AttackRecord>,
    /// Next boss id to allocate; monotonically increasing.
    pub next_boss_id: u64,
    /// Counts every attack ever resolved, used for seed derivation.
    pub attack_nonce: u64,
}

impl RaidState {
    /// Tallies per-player damage against one boss from the durable log.
    pub fn ledger_for(&self, boss: BossId) -> DamageLedger {
        DamageLedger::from_records(boss, &self.logs)
    }

    /// The most recent attack records, newest first.
    pub fn recent_attacks(&self, limit: usize) -> Vec<&AttackRecord> {
        self.logs.iter().rev().take(limit).collect()
    }

    /// Players that have attacked the given boss, with their progress.
    pub fn participants_for(&self, boss: BossId) -> Vec<(PlayerId, &PlayerProgress)> {
        let ledger = self.ledger_for(boss);
        ledger
            .iter()
            .filter_map(|(player, _)| self.players.get(&player).map(|p| (player, p)))
            .collect()
    }
}
