//! Error kinds shared by every rosterdb subsystem
//!
//! Each subsystem has its own concrete error type. All of them map onto one
//! of the kinds below so the shell can report a stable code without
//! matching on subsystem-specific variants.

use std::fmt;

/// The error taxonomy surfaced at the core/shell boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Candidate identifier fails the character/length rule
    InvalidFormat,
    /// Age, score, or name outside its bound
    OutOfRange,
    /// Create with an id already present
    DuplicateId,
    /// Store full, or persisted count larger than capacity
    CapacityExceeded,
    /// Lookup, update, or delete on an absent record
    NotFound,
    /// Statistics requested on zero records
    EmptyRoster,
    /// Persisted image is truncated or structurally invalid
    CorruptFormat,
    /// Storage medium cannot be opened, read, or written
    IoError,
}

impl ErrorKind {
    /// Returns the stable error code string.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "ROSTER_INVALID_FORMAT",
            ErrorKind::OutOfRange => "ROSTER_OUT_OF_RANGE",
            ErrorKind::DuplicateId => "ROSTER_DUPLICATE_ID",
            ErrorKind::CapacityExceeded => "ROSTER_CAPACITY_EXCEEDED",
            ErrorKind::NotFound => "ROSTER_NOT_FOUND",
            ErrorKind::EmptyRoster => "ROSTER_EMPTY",
            ErrorKind::CorruptFormat => "ROSTER_CORRUPT_FORMAT",
            ErrorKind::IoError => "ROSTER_IO_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
