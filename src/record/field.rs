//! Typed single-field updates

use std::fmt;

use super::student::Subject;

/// The mutable fields of a record. The id is not among them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Name,
    Age,
    Score(Subject),
}

impl RecordField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::Name => "name",
            RecordField::Age => "age",
            RecordField::Score(subject) => subject.as_str(),
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A new value for one field of an existing record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Age(i32),
    Score(Subject, f32),
}

impl FieldUpdate {
    /// The field this update targets.
    pub fn field(&self) -> RecordField {
        match self {
            FieldUpdate::Name(_) => RecordField::Name,
            FieldUpdate::Age(_) => RecordField::Age,
            FieldUpdate::Score(subject, _) => RecordField::Score(*subject),
        }
    }

    /// Whether applying this update changes the derived average.
    pub fn touches_scores(&self) -> bool {
        matches!(self, FieldUpdate::Score(..))
    }
}
