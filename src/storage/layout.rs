//! Fixed-width record layout
//!
//! ```text
//! offset  size  field
//!      0    20  id       (NUL-padded)
//!     20    50  name     (NUL-padded)
//!     70     4  age      (i32 LE)
//!     74     4  math     (f32 LE)
//!     78     4  english  (f32 LE)
//!     82     4  chinese  (f32 LE)
//!     86     4  average  (f32 LE, derived, ignored on decode)
//! ```

use crate::record::{MAX_ID_LEN, MAX_NAME_LEN};

/// Size of the record-count header.
pub const HEADER_SIZE: usize = 4;

pub(crate) const ID_OFFSET: usize = 0;
pub(crate) const NAME_OFFSET: usize = ID_OFFSET + MAX_ID_LEN;
pub(crate) const AGE_OFFSET: usize = NAME_OFFSET + MAX_NAME_LEN;
pub(crate) const SCORES_OFFSET: usize = AGE_OFFSET + 4;
pub(crate) const AVERAGE_OFFSET: usize = SCORES_OFFSET + 3 * 4;

/// Size of one encoded record.
pub const RECORD_SIZE: usize = AVERAGE_OFFSET + 4;

/// Copies `value` into `out`, NUL-padding the remainder.
///
/// Callers guarantee `value` is shorter than `out`.
pub(crate) fn put_padded(out: &mut [u8], value: &str) {
    let bytes = value.as_bytes();
    out[..bytes.len()].copy_from_slice(bytes);
    out[bytes.len()..].fill(0);
}

/// Reads a NUL-terminated string from a fixed-width field.
///
/// Returns `None` if the field has no terminator or is not UTF-8.
pub(crate) fn get_padded(field: &[u8]) -> Option<&str> {
    let end = field.iter().position(|&b| b == 0)?;
    std::str::from_utf8(&field[..end]).ok()
}

pub(crate) fn read_i32(data: &[u8], offset: usize) -> i32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[offset..offset + 4]);
    i32::from_le_bytes(buf)
}

pub(crate) fn read_f32(data: &[u8], offset: usize) -> f32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[offset..offset + 4]);
    f32::from_le_bytes(buf)
}
