//! In-memory versioned store.

use std::sync::RwLock;

use crate::repository::error::RepositoryError;
use crate::repository::state::RaidState;
use crate::repository::traits::{CommitError, RaidStore, Version};

struct Versioned {
    state: RaidState,
    version: Version,
}

/// In-memory [`RaidStore`] backed by an `RwLock`.
///
/// The lock is held only for the clone-out and the compare-and-swap, never
/// across attack resolution.
pub struct InMemoryRaidStore {
    inner: RwLock<Versioned>,
}

impl InMemoryRaidStore {
    pub fn new() -> Self {
        Self::with_state(RaidState::default())
    }

    /// Starts from a prepared state at version zero. Used by embedders and
    /// tests that need a specific boss or log history in place.
    pub fn with_state(state: RaidState) -> Self {
        Self {
            inner: RwLock::new(Versioned { state, version: 0 }),
        }
    }
}

impl Default for InMemoryRaidStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RaidStore for InMemoryRaidStore {
    fn load(&self) -> Result<(RaidState, Version), RepositoryError> {
        let guard = self
            .inner
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok((guard.state.clone(), guard.version))
    }

    fn commit(&self, expected: Version, state: RaidState) -> Result<Version, CommitError> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if guard.version != expected {
            return Err(CommitError::Conflict {
                expected,
                actual: guard.version,
            });
        }
        guard.state = state;
        guard.version += 1;
        Ok(guard.version)
    }
}
