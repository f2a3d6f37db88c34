//! Roster store subsystem for rosterdb
//!
//! The roster is an ordered, capacity-bounded collection of student records.
//!
//! # Invariants Enforced
//!
//! - Ids are pairwise distinct at all times
//! - The store never holds more than `capacity()` records
//! - Every record's average matches its scores
//! - Rejected operations leave the store unchanged

mod errors;
mod store;

pub use errors::{RosterError, RosterResult};
pub use store::{RecordHandle, RosterStore, MAX_STUDENTS};
