//! Validation predicates

use super::errors::{ValidationError, ValidationResult};
use crate::record::{FieldUpdate, NewStudent, Subject, MAX_ID_LEN, MAX_NAME_LEN};

pub const MIN_AGE: i32 = 1;
pub const MAX_AGE: i32 = 150;
pub const MIN_SCORE: f32 = 0.0;
pub const MAX_SCORE: f32 = 100.0;

/// Accepts ids of 1..MAX_ID_LEN ASCII alphanumeric characters.
pub fn validate_id(candidate: &str) -> ValidationResult<()> {
    if candidate.is_empty() {
        return Err(ValidationError::invalid_format(candidate, "id is empty"));
    }

    if candidate.len() >= MAX_ID_LEN {
        return Err(ValidationError::invalid_format(
            candidate,
            "id must be shorter than 20 characters",
        ));
    }

    if !candidate.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(ValidationError::invalid_format(
            candidate,
            "id may only contain ASCII letters and digits",
        ));
    }

    Ok(())
}

/// Accepts names shorter than MAX_NAME_LEN bytes that contain no NUL.
pub fn validate_name(candidate: &str) -> ValidationResult<()> {
    if candidate.len() >= MAX_NAME_LEN || candidate.contains('\0') {
        return Err(ValidationError::out_of_range(
            "name",
            format!("{} bytes", candidate.len()),
            "fewer than 50 bytes without NUL",
        ));
    }
    Ok(())
}

/// Accepts ages within MIN_AGE..=MAX_AGE.
pub fn validate_age(value: i32) -> ValidationResult<()> {
    if !(MIN_AGE..=MAX_AGE).contains(&value) {
        return Err(ValidationError::out_of_range("age", value, "1..=150"));
    }
    Ok(())
}

/// Accepts scores within MIN_SCORE..=MAX_SCORE. NaN fails the range check.
pub fn validate_score(value: f32) -> ValidationResult<()> {
    validate_subject_score("score", value)
}

fn validate_subject_score(field: &'static str, value: f32) -> ValidationResult<()> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        return Err(ValidationError::out_of_range(field, value, "0..=100"));
    }
    Ok(())
}

/// Validates every field of a candidate, reporting the first failure.
pub fn validate_record(candidate: &NewStudent) -> ValidationResult<()> {
    validate_id(&candidate.id)?;
    validate_name(&candidate.name)?;
    validate_age(candidate.age)?;
    for subject in Subject::ALL {
        validate_subject_score(subject.as_str(), candidate.scores.get(subject))?;
    }
    Ok(())
}

/// Validates the new value carried by a field update.
pub fn validate_update(update: &FieldUpdate) -> ValidationResult<()> {
    match update {
        FieldUpdate::Name(name) => validate_name(name),
        FieldUpdate::Age(age) => validate_age(*age),
        FieldUpdate::Score(subject, value) => validate_subject_score(subject.as_str(), *value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::record::Scores;

    #[test]
    fn test_valid_ids() {
        assert!(validate_id("A1").is_ok());
        assert!(validate_id("2024001").is_ok());
        assert!(validate_id(&"x".repeat(MAX_ID_LEN - 1)).is_ok());
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = validate_id("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_long_id_rejected() {
        let err = validate_id(&"x".repeat(MAX_ID_LEN)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_non_alphanumeric_id_rejected() {
        for id in ["A-1", "a b", "id_1", "é1", "1\0"] {
            assert_eq!(
                validate_id(id).unwrap_err().kind(),
                ErrorKind::InvalidFormat,
                "{:?} should be rejected",
                id
            );
        }
    }

    #[test]
    fn test_score_bounds() {
        assert!(validate_score(0.0).is_ok());
        assert!(validate_score(100.0).is_ok());
        assert!(validate_score(55.5).is_ok());
        assert!(validate_score(-0.01).is_err());
        assert!(validate_score(100.01).is_err());
        assert!(validate_score(f32::NAN).is_err());
        assert!(validate_score(f32::INFINITY).is_err());
    }

    #[test]
    fn test_age_bounds() {
        assert!(validate_age(1).is_ok());
        assert!(validate_age(150).is_ok());
        assert_eq!(validate_age(0).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(validate_age(151).unwrap_err().kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_name_bounds() {
        assert!(validate_name("").is_ok());
        assert!(validate_name(&"n".repeat(MAX_NAME_LEN - 1)).is_ok());
        assert!(validate_name(&"n".repeat(MAX_NAME_LEN)).is_err());
        assert!(validate_name("a\0b").is_err());
    }

    #[test]
    fn test_record_reports_failing_subject() {
        let candidate = NewStudent::new("A1", "Alice", 20, Scores::new(90.0, 101.0, 80.0));
        match validate_record(&candidate).unwrap_err() {
            ValidationError::OutOfRange { field, .. } => assert_eq!(field, "english"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
