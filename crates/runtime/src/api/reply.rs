//! The direct response returned to an attacking player.

use serde::{Deserialize, Serialize};

/// What the attacker gets back immediately. Gold is nonzero only when this
/// attack landed the killing blow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttackReply {
    pub damage_dealt: u32,
    pub gold_earned: u64,
    pub xp_earned: u32,
    pub is_critical: bool,
    pub is_miss: bool,
    pub new_boss_hp: u32,
    /// Human-readable battle report for chat-style front-ends.
    pub message: String,
}
