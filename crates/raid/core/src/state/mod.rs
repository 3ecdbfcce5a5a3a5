//! Core state types: identifiers, resource meters, player progression,
//! and the append-only attack log record.
mod common;
mod progress;
mod record;

pub use common::{BossId, HitPoints, PlayerId};
pub use progress::PlayerProgress;
pub use record::AttackRecord;
