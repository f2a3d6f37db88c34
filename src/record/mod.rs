//! Student record types
//!
//! A record holds one student's identity, age, three subject scores, and the
//! derived average. The average has no setter: every constructor and every
//! score mutation recomputes it, so it can never drift from the scores.

mod field;
mod student;

pub use field::{FieldUpdate, RecordField};
pub use student::{NewStudent, Scores, StudentRecord, Subject};

/// Encoded width of the id field, including the terminating NUL.
pub const MAX_ID_LEN: usize = 20;

/// Encoded width of the name field, including the terminating NUL.
pub const MAX_NAME_LEN: usize = 50;

/// Number of scored subjects per record.
pub const SUBJECT_COUNT: usize = 3;
