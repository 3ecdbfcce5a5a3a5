//! Asynchronous abstractions for sourcing data the raid does not own.
//!
//! Population (how many players count toward boss HP) and upgrade ownership
//! (what each player bought in the shop) live in the embedding application;
//! the raid only consumes them.

use std::collections::HashMap;

use async_trait::async_trait;

use raid_core::state::PlayerId;

/// Source of the active player count used to scale new boss HP.
#[async_trait]
pub trait PopulationProvider: Send + Sync {
    async fn active_players(&self) -> u64;
}

/// Fixed population, for tests and single-group deployments.
pub struct FixedPopulation(pub u64);

#[async_trait]
impl PopulationProvider for FixedPopulation {
    async fn active_players(&self) -> u64 {
        self.0
    }
}

/// Source of each player's owned upgrade levels, keyed by upgrade key.
///
/// Ownership is read once per attack submission; a purchase that lands
/// mid-resolution applies from the next attack on.
#[async_trait]
pub trait OwnershipProvider: Send + Sync {
    async fn owned_upgrades(&self, player: PlayerId) -> HashMap<String, u8>;
}

/// Ownership source that owns nothing, for tests and raids without a shop.
pub struct NoUpgrades;

#[async_trait]
impl OwnershipProvider for NoUpgrades {
    async fn owned_upgrades(&self, _player: PlayerId) -> HashMap<String, u8> {
        HashMap::new()
    }
}
