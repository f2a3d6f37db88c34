//! Configuration file handling
//!
//! The config file is optional JSON. A missing file yields the defaults;
//! an unreadable or invalid file is an error.
//!
//! ```json
//! { "data_file": "students.dat", "capacity": 100 }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::observability::{log_event_with_fields, Event};
use crate::roster::MAX_STUDENTS;
use crate::storage::DEFAULT_DATA_FILE;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Roster data file (optional, default "students.dat")
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Maximum number of records (optional, default 100, at most 100)
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_capacity() -> usize {
    MAX_STUDENTS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            capacity: default_capacity(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults if it is absent
    pub fn load(path: &Path) -> CliResult<Self> {
        let config = match fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                return Err(CliError::config_error(format!(
                    "Failed to read config {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let source = path.display().to_string();
        let data_file = config.data_file.display().to_string();
        log_event_with_fields(
            Event::ConfigLoaded,
            &[("config", source.as_str()), ("data_file", data_file.as_str())],
        );
        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.capacity == 0 || self.capacity > MAX_STUDENTS {
            return Err(CliError::config_error(format!(
                "capacity must be within 1..={}, got {}",
                MAX_STUDENTS, self.capacity
            )));
        }

        if self.data_file.as_os_str().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        Ok(())
    }
}
