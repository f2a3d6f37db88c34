//! Field validation for candidate record values
//!
//! Validation rules:
//! - id: 1..=19 ASCII letters or digits
//! - name: fewer than 50 bytes, no NUL
//! - age: 1..=150
//! - score: 0..=100, NaN rejected
//!
//! All validators are pure predicates. They never mutate their input and
//! never consult the store; uniqueness is the store's concern.

mod errors;
mod rules;

pub use errors::{ValidationError, ValidationResult};
pub use rules::{
    validate_age, validate_id, validate_name, validate_record, validate_score, validate_update,
    MAX_AGE, MAX_SCORE, MIN_AGE, MIN_SCORE,
};
