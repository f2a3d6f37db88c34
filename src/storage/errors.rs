//! Storage error types
//!
//! Error codes:
//! - ROSTER_IO_ERROR
//! - ROSTER_CORRUPT_FORMAT
//! - ROSTER_CAPACITY_EXCEEDED
//!
//! None of these abort the process. A failed load leaves the caller's store
//! untouched; a failed save may leave a truncated file behind.

use std::fmt;
use std::io;

use crate::error::ErrorKind;

/// Storage-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorCode {
    /// Data file cannot be opened, read, or written
    RosterIoError,
    /// Data file is truncated or holds invalid records
    RosterCorruptFormat,
    /// Data file declares more records than the roster can hold
    RosterCapacityExceeded,
}

impl StorageErrorCode {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StorageErrorCode::RosterIoError => ErrorKind::IoError,
            StorageErrorCode::RosterCorruptFormat => ErrorKind::CorruptFormat,
            StorageErrorCode::RosterCapacityExceeded => ErrorKind::CapacityExceeded,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

impl fmt::Display for StorageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Storage error with code, message, optional context, and IO source
#[derive(Debug)]
pub struct StorageError {
    code: StorageErrorCode,
    message: String,
    details: Option<String>,
    source: Option<io::Error>,
}

impl StorageError {
    pub fn io_error(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StorageErrorCode::RosterIoError,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    /// Corruption with the byte offset where decoding stopped
    pub fn corrupt_at_offset(offset: usize, reason: impl Into<String>) -> Self {
        Self {
            code: StorageErrorCode::RosterCorruptFormat,
            message: reason.into(),
            details: Some(format!("byte_offset: {}", offset)),
            source: None,
        }
    }

    /// Corruption in a specific record slot
    pub fn corrupt_record(index: usize, reason: impl Into<String>) -> Self {
        Self {
            code: StorageErrorCode::RosterCorruptFormat,
            message: reason.into(),
            details: Some(format!("record_index: {}", index)),
            source: None,
        }
    }

    pub fn capacity_exceeded(declared: usize, capacity: usize) -> Self {
        Self {
            code: StorageErrorCode::RosterCapacityExceeded,
            message: format!(
                "data file declares {} records, capacity is {}",
                declared, capacity
            ),
            details: None,
            source: None,
        }
    }

    pub fn code(&self) -> StorageErrorCode {
        self.code
    }

    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        if let Some(ref source) = self.source {
            write!(f, ": {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
