//! Unified error types surfaced by the runtime API.

use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The commit loop lost the race on every attempt. The attack was not
    /// applied; the client may simply resubmit.
    #[error("raid state conflict persisted after {attempts} attempts")]
    Conflict { attempts: u32 },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("invalid upgrade catalog: {0}")]
    InvalidCatalog(#[from] raid_core::upgrade::RegistryError),
}

impl RuntimeError {
    /// Stable machine-readable code for clients that branch on failure kind.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::Conflict { .. } => "conflict",
            Self::Repository(_) => "repository",
            Self::InvalidCatalog(_) => "invalid_catalog",
        }
    }
}
