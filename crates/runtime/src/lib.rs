//! Runtime orchestration for the shared raid session.
//!
//! This crate wires the deterministic combat rules from `raid-core` into a
//! concurrent service: players submit workout attacks against one shared
//! boss, and the runtime guarantees at-most-once death settlement and
//! respawn no matter how many attacks land at once.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`machine`] applies one attack to a working copy of raid state
//! - [`repository`] provides the versioned store the commit loop runs against
pub mod api;
pub mod machine;
pub mod repository;
pub mod runtime;

pub use api::{
    AttackDigest, AttackReply, FixedPopulation, NoUpgrades, OwnershipProvider, Participant,
    PopulationProvider, RaidEvent, RaidHandle, RaidSnapshot, Result, RuntimeError,
};
pub use repository::{
    CommitError, InMemoryRaidStore, RaidState, RaidStore, RepositoryError, Version,
};
pub use runtime::{Raid, RaidBuilder, RuntimeConfig};
