//! Per-attack damage computation.
//!
//! The pipeline takes one attack submission plus the boss's current
//! traits/debuffs and the attacker's level/upgrades, and produces a
//! deterministic-given-seed damage result.
mod formula;
mod pipeline;
mod sport;

pub use formula::BaseDamage;
pub use pipeline::{AttackOutcome, resolve_attack, resolve_plain};
pub use sport::{AttackInput, SportKind};
