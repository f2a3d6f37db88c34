//! Roster store error types

use thiserror::Error;

use crate::error::ErrorKind;
use crate::validator::ValidationError;

/// Errors returned by roster store operations.
///
/// Every rejection is a no-op on the store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("id already present: {0}")]
    DuplicateId(String),

    #[error("roster is full: capacity {capacity}")]
    CapacityExceeded { capacity: usize },

    #[error("record not found: {0}")]
    NotFound(String),

    #[error("roster has no records")]
    EmptyRoster,
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::Validation(e) => e.kind(),
            RosterError::DuplicateId(_) => ErrorKind::DuplicateId,
            RosterError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            RosterError::NotFound(_) => ErrorKind::NotFound,
            RosterError::EmptyRoster => ErrorKind::EmptyRoster,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
