//! Purchasable upgrade definitions and the runtime registry.
//!
//! Upgrades are data: a content crate (or a loader) declares them, the
//! registry indexes them, and the combat pipeline applies their effects.
mod def;
mod registry;

pub use def::{UpgradeDef, UpgradeEffect};
pub use registry::{RegistryError, UpgradeRegistry};
