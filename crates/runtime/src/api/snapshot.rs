//! Read-only view of the raid for status displays.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use raid_core::state::{PlayerId, PlayerProgress};
use raid_core::{BossKind, BossTraits, Debuff, SportKind};

use crate::repository::RaidState;

/// How many log entries the snapshot carries.
const RECENT_ATTACK_LIMIT: usize = 5;

/// Condensed attack log entry, newest first in [`RaidSnapshot`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttackDigest {
    pub player: PlayerId,
    pub sport: SportKind,
    pub damage: u32,
    pub is_critical: bool,
    pub is_miss: bool,
    pub at: DateTime<Utc>,
}

/// One player that has damaged the current boss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub player: PlayerId,
    pub level: u32,
}

/// Point-in-time view of the raid, safe to serialize onto any wire.
///
/// When no boss has ever spawned, `boss_active` is false and the boss
/// fields hold placeholder zeros.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaidSnapshot {
    pub boss_active: bool,
    pub boss_name: String,
    pub boss_kind: BossKind,
    pub traits: BossTraits,
    pub max_hp: u32,
    pub current_hp: u32,
    pub active_debuffs: Vec<Debuff>,
    pub active_player_count: u64,
    pub recent_attacks: Vec<AttackDigest>,
    pub participants: Vec<Participant>,
}

impl RaidSnapshot {
    pub(crate) fn from_state(state: &RaidState, active_player_count: u64) -> Self {
        let recent_attacks = state
            .recent_attacks(RECENT_ATTACK_LIMIT)
            .into_iter()
            .map(|record| AttackDigest {
                player: record.player,
                sport: record.sport,
                damage: record.damage,
                is_critical: record.is_critical,
                is_miss: record.is_miss,
                at: record.at,
            })
            .collect();

        match &state.active_boss {
            Some(boss) if boss.active => Self {
                boss_active: true,
                boss_name: boss.name.clone(),
                boss_kind: boss.kind,
                traits: boss.traits,
                max_hp: boss.hp.maximum(),
                current_hp: boss.hp.current(),
                active_debuffs: boss.debuffs.iter().collect(),
                active_player_count,
                recent_attacks,
                participants: state
                    .participants_for(boss.id)
                    .into_iter()
                    .map(|(player, progress): (PlayerId, &PlayerProgress)| Participant {
                        player,
                        level: progress.level(),
                    })
                    .collect(),
            },
            _ => Self {
                boss_active: false,
                boss_name: "No boss is active".to_owned(),
                boss_kind: BossKind::Normal,
                traits: BossTraits::default(),
                max_hp: 0,
                current_hp: 0,
                active_debuffs: Vec::new(),
                active_player_count,
                recent_attacks,
                participants: Vec::new(),
            },
        }
    }
}
