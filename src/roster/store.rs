//! In-memory roster store
//!
//! Records live in insertion order in a `Vec`. Lookups are linear scans;
//! the collection is small and bounded, so no index is kept.

use serde::Serialize;

use super::errors::{RosterError, RosterResult};
use crate::record::{FieldUpdate, NewStudent, StudentRecord};
use crate::validator::{validate_record, validate_update};

/// Hard ceiling on the number of records a store may hold.
pub const MAX_STUDENTS: usize = 100;

/// Positional reference to a record in a store.
///
/// A handle is valid until the next delete, sort, or reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordHandle(usize);

impl RecordHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Ordered, capacity-bounded collection of student records.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterStore {
    records: Vec<StudentRecord>,
    capacity: usize,
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterStore {
    /// Creates an empty store with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_STUDENTS)
    }

    /// Creates an empty store holding at most `capacity` records.
    ///
    /// The capacity is clamped to `MAX_STUDENTS`.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_STUDENTS);
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Snapshot view of all records in store order.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    /// Mutable access for in-place reordering.
    pub(crate) fn records_mut(&mut self) -> &mut [StudentRecord] {
        &mut self.records
    }

    /// Validates and appends a new record.
    ///
    /// Checks run in order: capacity, field validation, id uniqueness.
    pub fn create(&mut self, candidate: NewStudent) -> RosterResult<RecordHandle> {
        if self.is_full() {
            return Err(RosterError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        validate_record(&candidate)?;

        if self.position(&candidate.id).is_some() {
            return Err(RosterError::DuplicateId(candidate.id));
        }

        self.records.push(StudentRecord::from_candidate(candidate));
        Ok(RecordHandle(self.records.len() - 1))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Finds the record with the given id.
    pub fn find_by_id(&self, id: &str) -> RosterResult<RecordHandle> {
        self.position(id)
            .map(RecordHandle)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    /// Returns handles of every record whose name equals `name`, in store order.
    ///
    /// The iterator is lazy; clone it to restart the scan.
    pub fn find_by_name<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = RecordHandle> + Clone + 'a {
        self.records
            .iter()
            .enumerate()
            .filter(move |(_, r)| r.name() == name)
            .map(|(i, _)| RecordHandle(i))
    }

    /// Returns the record behind a handle.
    pub fn get(&self, handle: RecordHandle) -> RosterResult<&StudentRecord> {
        self.records
            .get(handle.0)
            .ok_or_else(|| RosterError::NotFound(format!("handle {}", handle.0)))
    }

    /// Returns the record with the given id.
    pub fn get_by_id(&self, id: &str) -> RosterResult<&StudentRecord> {
        let handle = self.find_by_id(id)?;
        self.get(handle)
    }

    /// Validates and applies a single-field update.
    ///
    /// A score update recomputes the average before this call returns.
    pub fn update_field(&mut self, handle: RecordHandle, update: FieldUpdate) -> RosterResult<()> {
        validate_update(&update)?;
        let record = self
            .records
            .get_mut(handle.0)
            .ok_or_else(|| RosterError::NotFound(format!("handle {}", handle.0)))?;
        record.apply(update);
        Ok(())
    }

    pub fn update_by_id(&mut self, id: &str, update: FieldUpdate) -> RosterResult<()> {
        let handle = self.find_by_id(id)?;
        self.update_field(handle, update)
    }

    /// Removes a record, shifting later records down to close the gap.
    pub fn delete(&mut self, handle: RecordHandle) -> RosterResult<StudentRecord> {
        if handle.0 >= self.records.len() {
            return Err(RosterError::NotFound(format!("handle {}", handle.0)));
        }
        Ok(self.records.remove(handle.0))
    }

    pub fn delete_by_id(&mut self, id: &str) -> RosterResult<StudentRecord> {
        let handle = self.find_by_id(id)?;
        self.delete(handle)
    }
}
