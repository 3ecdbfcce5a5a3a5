//! High-level raid orchestrator.
//!
//! The [`Raid`] owns the shared wiring (store, providers, registry, event
//! bus) and hands out cloneable [`RaidHandle`]s. There is no background
//! worker: attacks commit through optimistic versioning, so any number of
//! tasks can drive the raid through their handles directly.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;

use raid_content::{builtin_catalog, UpgradeCatalog};
use raid_core::{BalanceConfig, PcgRng};

use crate::api::handle::Shared;
use crate::api::{
    FixedPopulation, NoUpgrades, OwnershipProvider, PopulationProvider, RaidEvent, RaidHandle,
    Result,
};
use crate::repository::{InMemoryRaidStore, RaidStore};

/// Runtime configuration shared across handles.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub balance: BalanceConfig,
    pub event_buffer_size: usize,
    /// How many commit conflicts to absorb before giving up on an attack.
    pub max_commit_attempts: u32,
    /// Seed for all in-session randomness. `None` draws a random seed at
    /// build time; set it explicitly to replay a session.
    pub session_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            balance: BalanceConfig::default(),
            event_buffer_size: 100,
            max_commit_attempts: 8,
            session_seed: None,
        }
    }
}

/// Main orchestrator owning the raid wiring.
///
/// [`RaidHandle`] provides a cloneable façade for clients.
pub struct Raid {
    handle: RaidHandle,
}

impl Raid {
    /// Create a new raid builder.
    pub fn builder() -> RaidBuilder {
        RaidBuilder::new()
    }

    /// Get a cloneable handle to this raid.
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RaidHandle {
        self.handle.clone()
    }

    /// Subscribe to raid events.
    pub fn subscribe(&self) -> broadcast::Receiver<RaidEvent> {
        self.handle.subscribe()
    }
}

/// Builder for [`Raid`] with flexible configuration.
pub struct RaidBuilder {
    config: RuntimeConfig,
    store: Option<Arc<dyn RaidStore>>,
    population: Option<Arc<dyn PopulationProvider>>,
    ownership: Option<Arc<dyn OwnershipProvider>>,
    catalog: Option<UpgradeCatalog>,
}

impl RaidBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            store: None,
            population: None,
            ownership: None,
            catalog: None,
        }
    }

    /// Override runtime configuration.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom store. Defaults to a fresh in-memory store.
    pub fn store(mut self, store: Arc<dyn RaidStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the population source. Defaults to a fixed population of one.
    pub fn population(mut self, provider: impl PopulationProvider + 'static) -> Self {
        self.population = Some(Arc::new(provider));
        self
    }

    /// Set the upgrade ownership source. Defaults to no upgrades.
    pub fn ownership(mut self, provider: impl OwnershipProvider + 'static) -> Self {
        self.ownership = Some(Arc::new(provider));
        self
    }

    /// Use a custom upgrade catalog instead of the built-in one.
    pub fn catalog(mut self, catalog: UpgradeCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Fix the session seed, making the whole raid replayable.
    pub fn session_seed(mut self, seed: u64) -> Self {
        self.config.session_seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Raid> {
        let registry = self
            .catalog
            .unwrap_or_else(builtin_catalog)
            .into_registry()?;
        let session_seed = self.config.session_seed.unwrap_or_else(rand::random);
        let (events, _) = broadcast::channel(self.config.event_buffer_size);

        info!(
            target: "raid::runtime",
            session_seed,
            upgrades = registry.len(),
            max_commit_attempts = self.config.max_commit_attempts,
            "raid runtime built"
        );

        let shared = Shared {
            store: self
                .store
                .unwrap_or_else(|| Arc::new(InMemoryRaidStore::new())),
            population: self
                .population
                .unwrap_or_else(|| Arc::new(FixedPopulation(1))),
            ownership: self.ownership.unwrap_or_else(|| Arc::new(NoUpgrades)),
            registry,
            balance: self.config.balance,
            rng: PcgRng,
            session_seed,
            events,
            max_commit_attempts: self.config.max_commit_attempts,
        };
        Ok(Raid {
            handle: RaidHandle::new(Arc::new(shared)),
        })
    }
}
