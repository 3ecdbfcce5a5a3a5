use chrono::{DateTime, Utc};

use crate::combat::SportKind;
use crate::state::{BossId, PlayerId};

/// Immutable record of one resolved attack.
///
/// The attack log is append-only and forms the audit trail; per-boss damage
/// totals for reward splitting are always recomputed from these records,
/// never from in-memory counters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackRecord {
    pub boss: BossId,
    pub player: PlayerId,
    pub sport: SportKind,
    pub damage: u32,
    pub is_critical: bool,
    pub is_miss: bool,
    pub xp_earned: u32,
    pub at: DateTime<Utc>,
}

impl AttackRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        boss: BossId,
        player: PlayerId,
        sport: SportKind,
        damage: u32,
        is_critical: bool,
        is_miss: bool,
        xp_earned: u32,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            boss,
            player,
            sport,
            damage,
            is_critical,
            is_miss,
            xp_earned,
            at,
        }
    }
}
