//! Types downstream clients interact with.
mod errors;
mod events;
pub(crate) mod handle;
mod providers;
mod reply;
mod snapshot;

pub use errors::{Result, RuntimeError};
pub use events::RaidEvent;
pub use handle::RaidHandle;
pub use providers::{FixedPopulation, NoUpgrades, OwnershipProvider, PopulationProvider};
pub use reply::AttackReply;
pub use snapshot::{AttackDigest, Participant, RaidSnapshot};
