//! Roster persistence subsystem for rosterdb
//!
//! The whole roster is persisted as one flat file that is overwritten on
//! every save. The layout is fixed-width and little-endian:
//!
//! ```text
//! +------------------+
//! | Record Count     | (i32 LE)
//! +------------------+
//! | Record 0         | (90 bytes)
//! +------------------+
//! | ...              |
//! +------------------+
//! ```
//!
//! # Design Principles
//!
//! - Whole-file overwrite (no append, no incremental update)
//! - Count checked against capacity before any record is read
//! - Every decoded record is re-validated; the persisted average is ignored
//! - A missing file means an empty roster

mod codec;
mod errors;
mod layout;
mod reader;
mod writer;

pub use codec::{decode, encode, encode_to};
pub use errors::{StorageError, StorageErrorCode, StorageResult};
pub use layout::{HEADER_SIZE, RECORD_SIZE};
pub use reader::RosterReader;
pub use writer::RosterWriter;

/// Default data file name.
pub const DEFAULT_DATA_FILE: &str = "students.dat";
