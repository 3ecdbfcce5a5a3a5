//! Versioned storage for the shared raid state.
//!
//! All mutation flows through [`RaidStore::commit`] with the version observed
//! at load time; a stale version is rejected so concurrent attackers retry
//! against fresh state instead of clobbering each other.
mod error;
mod memory;
mod state;
mod traits;

pub use error::RepositoryError;
pub use memory::InMemoryRaidStore;
pub use state::RaidState;
pub use traits::{CommitError, RaidStore, Version};
