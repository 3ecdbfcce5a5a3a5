//! Store contract for optimistic, versioned raid state commits.

use thiserror::Error;

use crate::repository::error::RepositoryError;
use crate::repository::state::RaidState;

/// Monotonic commit counter. Every successful commit bumps it by one.
pub type Version = u64;

/// A commit was rejected or failed to persist.
#[derive(Debug, Error)]
pub enum CommitError {
    /// Someone else committed since the caller loaded; reload and retry.
    #[error("version conflict: expected {expected}, store is at {actual}")]
    Conflict { expected: Version, actual: Version },

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

/// Versioned store holding the single shared raid state.
///
/// `load` returns a snapshot plus the version it was taken at; `commit`
/// replaces the state only if the store is still at that version. This is
/// the entire concurrency story: resolution itself is pure, so any
/// interleaving of load/resolve/commit cycles converges without locks held
/// across the computation.
pub trait RaidStore: Send + Sync {
    fn load(&self) -> Result<(RaidState, Version), RepositoryError>;

    /// Atomically replaces the state if `expected` still matches, returning
    /// the new version.
    fn commit(&self, expected: Version, state: RaidState) -> Result<Version, CommitError>;
}
