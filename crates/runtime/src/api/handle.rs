//! Client-facing handle to interact with the raid.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::broadcast;
use tracing::debug;

use raid_core::combat::AttackInput;
use raid_core::state::{PlayerId, PlayerProgress};
use raid_core::upgrade::UpgradeRegistry;
use raid_core::{BalanceConfig, PcgRng};

use crate::api::{
    AttackReply, OwnershipProvider, PopulationProvider, RaidEvent, RaidSnapshot, Result,
    RuntimeError,
};
use crate::machine::RaidMachine;
use crate::repository::{CommitError, RaidStore};

pub(crate) struct Shared {
    pub(crate) store: Arc<dyn RaidStore>,
    pub(crate) population: Arc<dyn PopulationProvider>,
    pub(crate) ownership: Arc<dyn OwnershipProvider>,
    pub(crate) registry: UpgradeRegistry,
    pub(crate) balance: BalanceConfig,
    pub(crate) rng: PcgRng,
    pub(crate) session_seed: u64,
    pub(crate) events: broadcast::Sender<RaidEvent>,
    pub(crate) max_commit_attempts: u32,
}

/// Cloneable façade over the raid. All mutation goes through [`attack`],
/// which runs an optimistic load/resolve/commit loop; reads never block
/// writers.
///
/// [`attack`]: RaidHandle::attack
#[derive(Clone)]
pub struct RaidHandle {
    shared: Arc<Shared>,
}

impl RaidHandle {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Submits one workout attack for a player.
    ///
    /// Resolution runs on a private copy of the state and commits only if
    /// nobody else committed in between; otherwise it reloads and re-resolves
    /// so death settlement and respawn happen at most once per boss. Events
    /// are published only for the resolution that actually landed.
    pub async fn attack(&self, player: PlayerId, input: AttackInput) -> Result<AttackReply> {
        let shared = &self.shared;
        let owned = shared.ownership.owned_upgrades(player).await;

        for attempt in 1..=shared.max_commit_attempts {
            let population = shared.population.active_players().await;
            let (mut working, version) = shared.store.load()?;
            let mut machine = RaidMachine::new(
                &mut working,
                &shared.registry,
                &shared.balance,
                &shared.rng,
                shared.session_seed,
            );
            let (reply, events) = machine.resolve(player, &input, &owned, population, Utc::now());

            match shared.store.commit(version, working) {
                Ok(_) => {
                    for event in events {
                        // Nobody listening is fine.
                        let _ = shared.events.send(event);
                    }
                    return Ok(reply);
                }
                Err(CommitError::Conflict { expected, actual }) => {
                    debug!(
                        target: "raid::handle",
                        %player,
                        attempt,
                        expected,
                        actual,
                        "commit conflict, retrying"
                    );
                }
                Err(CommitError::Storage(e)) => return Err(e.into()),
            }
        }

        Err(RuntimeError::Conflict {
            attempts: self.shared.max_commit_attempts,
        })
    }

    /// Point-in-time view of the raid. Never mutates state; before the first
    /// attack it reports the waiting placeholder rather than spawning.
    pub async fn snapshot(&self) -> Result<RaidSnapshot> {
        let population = self.shared.population.active_players().await;
        let (state, _) = self.shared.store.load()?;
        Ok(RaidSnapshot::from_state(&state, population))
    }

    /// A player's progression, if they have ever attacked.
    pub fn player(&self, player: PlayerId) -> Result<Option<PlayerProgress>> {
        let (state, _) = self.shared.store.load()?;
        Ok(state.players.get(&player).copied())
    }

    /// Subscribe to raid events.
    pub fn subscribe(&self) -> broadcast::Receiver<RaidEvent> {
        self.shared.events.subscribe()
    }
}
