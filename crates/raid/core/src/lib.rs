//! Deterministic raid combat logic shared across the runtime and offline tools.
//!
//! `raid-core` defines the canonical rules (boss generation, the per-attack
//! damage pipeline, upgrade effects, reward splitting) and exposes pure APIs
//! that are deterministic given an RNG seed. All shared-state mutation flows
//! through the runtime crate; everything here is side-effect free.
pub mod boss;
pub mod combat;
pub mod config;
pub mod env;
pub mod reward;
pub mod state;
pub mod upgrade;

pub use boss::{Boss, BossKind, BossTraits, Debuff, DebuffSet, generate_boss, reward_pool};
pub use combat::{AttackInput, AttackOutcome, SportKind, resolve_attack};
pub use config::BalanceConfig;
pub use env::{PcgRng, RngOracle, compute_seed, roll};
pub use reward::{DamageLedger, Payout, split_pool};
pub use state::{AttackRecord, BossId, HitPoints, PlayerId, PlayerProgress};
pub use upgrade::{RegistryError, UpgradeDef, UpgradeEffect, UpgradeRegistry};
