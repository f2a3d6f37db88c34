//! Record and score definitions

use serde::Serialize;
use std::fmt;

use super::field::FieldUpdate;
use super::SUBJECT_COUNT;

/// The three scored subjects, in persisted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Math,
    English,
    Chinese,
}

impl Subject {
    /// All subjects in persisted order.
    pub const ALL: [Subject; SUBJECT_COUNT] = [Subject::Math, Subject::English, Subject::Chinese];

    /// Position of this subject in persisted order.
    pub fn index(&self) -> usize {
        match self {
            Subject::Math => 0,
            Subject::English => 1,
            Subject::Chinese => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::English => "english",
            Subject::Chinese => "chinese",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores for the three subjects.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Scores {
    pub math: f32,
    pub english: f32,
    pub chinese: f32,
}

impl Scores {
    pub fn new(math: f32, english: f32, chinese: f32) -> Self {
        Self {
            math,
            english,
            chinese,
        }
    }

    /// Returns the score for one subject.
    pub fn get(&self, subject: Subject) -> f32 {
        match subject {
            Subject::Math => self.math,
            Subject::English => self.english,
            Subject::Chinese => self.chinese,
        }
    }

    fn set(&mut self, subject: Subject, value: f32) {
        match subject {
            Subject::Math => self.math = value,
            Subject::English => self.english = value,
            Subject::Chinese => self.chinese = value,
        }
    }

    /// Scores in persisted order.
    pub fn as_array(&self) -> [f32; SUBJECT_COUNT] {
        [self.math, self.english, self.chinese]
    }

    /// Arithmetic mean of the three scores.
    pub fn mean(&self) -> f32 {
        (self.math + self.english + self.chinese) / SUBJECT_COUNT as f32
    }
}

/// Candidate field values supplied by the shell for a new record.
///
/// Nothing here is validated yet; the store validates on `create`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub scores: Scores,
}

impl NewStudent {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i32, scores: Scores) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            scores,
        }
    }
}

/// A student record owned by a roster store.
///
/// Fields are private so the average can only change together with the
/// scores it is derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    id: String,
    name: String,
    age: i32,
    #[serde(flatten)]
    scores: Scores,
    average: f32,
}

impl StudentRecord {
    /// Builds a record from an already-validated candidate.
    pub(crate) fn from_candidate(candidate: NewStudent) -> Self {
        let average = candidate.scores.mean();
        Self {
            id: candidate.id,
            name: candidate.name,
            age: candidate.age,
            scores: candidate.scores,
            average,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn score(&self, subject: Subject) -> f32 {
        self.scores.get(subject)
    }

    /// Mean of the three scores, kept in step with every score change.
    pub fn average(&self) -> f32 {
        self.average
    }

    /// Applies an already-validated update.
    pub(crate) fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(name) => self.name = name,
            FieldUpdate::Age(age) => self.age = age,
            FieldUpdate::Score(subject, value) => {
                self.scores.set(subject, value);
                self.average = self.scores.mean();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(math: f32, english: f32, chinese: f32) -> StudentRecord {
        StudentRecord::from_candidate(NewStudent::new(
            "S1",
            "Alice",
            20,
            Scores::new(math, english, chinese),
        ))
    }

    #[test]
    fn test_average_computed_on_construction() {
        let r = record(80.0, 90.0, 100.0);
        assert!((r.average() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_score_update_recomputes_average() {
        let mut r = record(60.0, 70.0, 80.0);
        r.apply(FieldUpdate::Score(Subject::Chinese, 20.0));
        assert_eq!(r.score(Subject::Chinese), 20.0);
        assert!((r.average() - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_non_score_update_keeps_average() {
        let mut r = record(60.0, 70.0, 80.0);
        r.apply(FieldUpdate::Age(33));
        r.apply(FieldUpdate::Name("Bob".into()));
        assert_eq!(r.age(), 33);
        assert_eq!(r.name(), "Bob");
        assert!((r.average() - 70.0).abs() < 1e-4);
    }

    #[test]
    fn test_subject_order_matches_array() {
        let scores = Scores::new(1.0, 2.0, 3.0);
        for subject in Subject::ALL {
            assert_eq!(scores.as_array()[subject.index()], scores.get(subject));
        }
    }

    #[test]
    fn test_serializes_flat_scores() {
        let value = serde_json::to_value(record(80.0, 90.0, 100.0)).unwrap();
        assert_eq!(value["id"], "S1");
        assert_eq!(value["math"], 80.0);
        assert_eq!(value["average"], 90.0);
    }
}
