//! Events emitted by the raid for front-ends to observe.
//!
//! Consumers subscribe through [`crate::api::RaidHandle::subscribe`] and must
//! not block; slow subscribers lose old events rather than stalling attacks.

use raid_core::reward::Payout;
use raid_core::state::{BossId, PlayerId};
use raid_core::BossKind;

/// Events emitted as attacks resolve and bosses turn over.
#[derive(Debug, Clone)]
pub enum RaidEvent {
    /// A new boss took the active slot.
    BossSpawned {
        boss: BossId,
        name: String,
        kind: BossKind,
    },
    /// One attack finished resolving against the boss.
    AttackResolved {
        boss: BossId,
        player: PlayerId,
        damage: u32,
        is_critical: bool,
        is_miss: bool,
        boss_hp: u32,
    },
    /// The boss died and its pool was distributed. Emitted exactly once per
    /// boss regardless of how many attacks raced on the killing blow.
    BossDefeated {
        boss: BossId,
        payouts: Vec<Payout>,
    },
}
