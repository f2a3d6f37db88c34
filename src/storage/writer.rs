//! Roster saving to the data file
//!
//! Every save truncates and rewrites the whole file, then fsyncs it.
//! A failed save may leave a truncated file; there is no rollback.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::codec::encode_to;
use super::errors::{StorageError, StorageResult};
use crate::observability::{log_event_with_fields, Event};
use crate::roster::RosterStore;

/// Saves a roster to one data file.
pub struct RosterWriter {
    path: PathBuf,
}

impl RosterWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the data file with the encoded roster.
    ///
    /// Creates the parent directory if it is missing.
    ///
    /// # Errors
    ///
    /// Returns `ROSTER_IO_ERROR` if the file cannot be created, written, or synced.
    pub fn save(&self, store: &RosterStore) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    StorageError::io_error(
                        format!("failed to create data directory: {}", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let file = File::create(&self.path).map_err(|e| {
            StorageError::io_error(
                format!("failed to create data file: {}", self.path.display()),
                e,
            )
        })?;

        let mut writer = BufWriter::new(file);
        encode_to(&mut writer, store)
            .and_then(|_| writer.flush())
            .map_err(|e| {
                StorageError::io_error(
                    format!("failed to write data file: {}", self.path.display()),
                    e,
                )
            })?;

        writer.get_ref().sync_all().map_err(|e| {
            StorageError::io_error(
                format!("fsync failed for data file: {}", self.path.display()),
                e,
            )
        })?;

        let path = self.path.display().to_string();
        let records = store.len().to_string();
        log_event_with_fields(
            Event::StoreSaved,
            &[("path", path.as_str()), ("records", records.as_str())],
        );
        Ok(())
    }
}
