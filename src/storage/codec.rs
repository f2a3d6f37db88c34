//! Roster encode/decode
//!
//! Decoding is all-or-nothing: it builds a fresh store and returns it only
//! if every declared record decodes and passes the roster's `create` checks.

use std::io::{self, Write};

use super::errors::{StorageError, StorageResult};
use super::layout::{
    get_padded, put_padded, read_f32, read_i32, AGE_OFFSET, AVERAGE_OFFSET, HEADER_SIZE,
    ID_OFFSET, NAME_OFFSET, RECORD_SIZE, SCORES_OFFSET,
};
use crate::observability::{log_event_with_fields, Event};
use crate::record::{NewStudent, Scores, StudentRecord, MAX_ID_LEN, MAX_NAME_LEN};
use crate::roster::RosterStore;

/// Tolerance when comparing a persisted average to the recomputed one.
const AVERAGE_TOLERANCE: f32 = 1e-3;

fn encode_record(record: &StudentRecord, out: &mut [u8; RECORD_SIZE]) {
    put_padded(&mut out[ID_OFFSET..ID_OFFSET + MAX_ID_LEN], record.id());
    put_padded(&mut out[NAME_OFFSET..NAME_OFFSET + MAX_NAME_LEN], record.name());
    out[AGE_OFFSET..AGE_OFFSET + 4].copy_from_slice(&record.age().to_le_bytes());
    for (i, score) in record.scores().as_array().iter().enumerate() {
        let at = SCORES_OFFSET + i * 4;
        out[at..at + 4].copy_from_slice(&score.to_le_bytes());
    }
    out[AVERAGE_OFFSET..AVERAGE_OFFSET + 4].copy_from_slice(&record.average().to_le_bytes());
}

/// Writes the encoded roster to `writer`.
pub fn encode_to<W: Write>(writer: &mut W, store: &RosterStore) -> io::Result<()> {
    // len() <= MAX_STUDENTS, so the cast cannot truncate.
    writer.write_all(&(store.len() as i32).to_le_bytes())?;

    let mut block = [0u8; RECORD_SIZE];
    for record in store.iter() {
        encode_record(record, &mut block);
        writer.write_all(&block)?;
    }
    Ok(())
}

/// Encodes the roster into a byte vector.
pub fn encode(store: &RosterStore) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_SIZE + store.len() * RECORD_SIZE);
    // Writing into a Vec cannot fail.
    let _ = encode_to(&mut buf, store);
    buf
}

/// A NaN persisted average counts as stale.
fn average_is_stale(persisted: f32, recomputed: f32) -> bool {
    persisted.is_nan() || (persisted - recomputed).abs() > AVERAGE_TOLERANCE
}

fn decode_record(index: usize, block: &[u8]) -> StorageResult<NewStudent> {
    let id = get_padded(&block[ID_OFFSET..ID_OFFSET + MAX_ID_LEN]).ok_or_else(|| {
        StorageError::corrupt_record(index, "id field is not a terminated UTF-8 string")
    })?;
    let name = get_padded(&block[NAME_OFFSET..NAME_OFFSET + MAX_NAME_LEN]).ok_or_else(|| {
        StorageError::corrupt_record(index, "name field is not a terminated UTF-8 string")
    })?;

    let scores = Scores::new(
        read_f32(block, SCORES_OFFSET),
        read_f32(block, SCORES_OFFSET + 4),
        read_f32(block, SCORES_OFFSET + 8),
    );

    let persisted_average = read_f32(block, AVERAGE_OFFSET);
    if average_is_stale(persisted_average, scores.mean()) {
        let index = index.to_string();
        log_event_with_fields(Event::StaleAverage, &[("id", id), ("record_index", index.as_str())]);
    }

    Ok(NewStudent::new(id, name, read_i32(block, AGE_OFFSET), scores))
}

/// Decodes a roster image into a fresh store of the given capacity.
///
/// # Errors
///
/// - `ROSTER_CORRUPT_FORMAT` if the header is short or negative, fewer
///   records are present than declared, or a record fails validation
/// - `ROSTER_CAPACITY_EXCEEDED` if the declared count exceeds `capacity`
pub fn decode(data: &[u8], capacity: usize) -> StorageResult<RosterStore> {
    if data.len() < HEADER_SIZE {
        return Err(StorageError::corrupt_at_offset(
            0,
            format!("header truncated: {} bytes", data.len()),
        ));
    }

    let declared = read_i32(data, 0);
    let count = usize::try_from(declared).map_err(|_| {
        StorageError::corrupt_at_offset(0, format!("negative record count: {}", declared))
    })?;

    let mut store = RosterStore::with_capacity(capacity);
    if count > store.capacity() {
        return Err(StorageError::capacity_exceeded(count, store.capacity()));
    }

    let body = &data[HEADER_SIZE..];
    let available = body.len() / RECORD_SIZE;
    if available < count {
        return Err(StorageError::corrupt_at_offset(
            HEADER_SIZE + available * RECORD_SIZE,
            format!("declared {} records, found {}", count, available),
        ));
    }

    for (index, block) in body.chunks_exact(RECORD_SIZE).take(count).enumerate() {
        let candidate = decode_record(index, block)?;
        store
            .create(candidate)
            .map_err(|e| StorageError::corrupt_record(index, e.to_string()))?;
    }

    Ok(store)
}
