//! CLI-specific error types
//!
//! Core errors keep their kind's code (ROSTER_DUPLICATE_ID, ...) so the JSON
//! error response reports exactly what the core returned.

use std::fmt;
use std::io;

use crate::error::ErrorKind;
use crate::roster::RosterError;
use crate::storage::StorageError;
use crate::validator::ValidationError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout)
    IoError,
    /// Argument value could not be parsed
    InvalidArgument,
    /// Error reported by the roster core
    Core(ErrorKind),
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "ROSTER_CLI_CONFIG_ERROR",
            Self::IoError => "ROSTER_CLI_IO_ERROR",
            Self::InvalidArgument => "ROSTER_CLI_INVALID_ARGUMENT",
            Self::Core(kind) => kind.code(),
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidArgument, msg)
    }

    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ValidationError> for CliError {
    fn from(e: ValidationError) -> Self {
        Self::new(CliErrorCode::Core(e.kind()), e.to_string())
    }
}

impl From<RosterError> for CliError {
    fn from(e: RosterError) -> Self {
        Self::new(CliErrorCode::Core(e.kind()), e.to_string())
    }
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        Self::new(CliErrorCode::Core(e.kind()), e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
