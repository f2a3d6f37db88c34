//! rosterdb - A bounded student roster with a fixed-width binary store
//!
//! Subsystems, leaves first:
//! - `record`: student records and typed field updates
//! - `validator`: pure predicates over candidate values
//! - `roster`: the capacity-bounded, id-unique store
//! - `sorter`: stable in-place ordering
//! - `analytics`: aggregate statistics
//! - `storage`: binary persistence
//! - `observability`: structured JSON logging
//! - `cli`: one-shot command shell

pub mod analytics;
pub mod cli;
pub mod error;
pub mod observability;
pub mod record;
pub mod roster;
pub mod sorter;
pub mod storage;
pub mod validator;

pub use error::ErrorKind;
