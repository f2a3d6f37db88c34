//! Roster loading from the data file
//!
//! - A missing file is not an error: it means "start with an empty roster"
//! - Any other open/read failure is ROSTER_IO_ERROR
//! - Structural failures are ROSTER_CORRUPT_FORMAT or ROSTER_CAPACITY_EXCEEDED

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::codec::decode;
use super::errors::{StorageError, StorageResult};
use super::layout::{HEADER_SIZE, RECORD_SIZE};
use crate::observability::{log_event_with_fields, Event};
use crate::roster::{RosterStore, MAX_STUDENTS};

/// Loads a roster from one data file.
pub struct RosterReader {
    path: PathBuf,
    capacity: usize,
}

impl RosterReader {
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Largest prefix of the file a load can ever decode.
    fn max_image_len(&self) -> u64 {
        (HEADER_SIZE + self.capacity.min(MAX_STUDENTS) * RECORD_SIZE) as u64
    }

    /// Reads the decodable prefix of the file, or `None` if it does not exist.
    fn read_image(&self) -> StorageResult<Option<Vec<u8>>> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::io_error(
                    format!("failed to open data file: {}", self.path.display()),
                    e,
                ))
            }
        };

        let mut image = Vec::new();
        file.take(self.max_image_len())
            .read_to_end(&mut image)
            .map_err(|e| {
                StorageError::io_error(
                    format!("failed to read data file: {}", self.path.display()),
                    e,
                )
            })?;
        Ok(Some(image))
    }

    /// Loads the roster, or an empty one if the file is absent.
    pub fn load(&self) -> StorageResult<RosterStore> {
        let path = self.path.display().to_string();

        let Some(image) = self.read_image()? else {
            log_event_with_fields(Event::StoreLoadMissing, &[("path", path.as_str())]);
            return Ok(RosterStore::with_capacity(self.capacity));
        };

        let store = decode(&image, self.capacity).map_err(|e| {
            log_event_with_fields(
                Event::CorruptionDetected,
                &[("path", path.as_str()), ("error", e.to_string().as_str())],
            );
            e
        })?;

        let records = store.len().to_string();
        log_event_with_fields(
            Event::StoreLoaded,
            &[("path", path.as_str()), ("records", records.as_str())],
        );
        Ok(store)
    }

    /// Replaces `store` with the file's contents. On error `store` is untouched.
    pub fn load_into(&self, store: &mut RosterStore) -> StorageResult<()> {
        *store = self.load()?;
        Ok(())
    }
}
