//! Sort keys and directions

use std::cmp::Ordering;

use crate::record::{StudentRecord, Subject};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Record field to order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Average,
    Score(Subject),
    Age,
    Id,
    Name,
}

impl SortKey {
    /// Compares two records by this key, ascending.
    ///
    /// Floats compare numerically, so `-0.0` and `0.0` are equal and keep
    /// input order.
    pub fn compare(&self, a: &StudentRecord, b: &StudentRecord) -> Ordering {
        match self {
            SortKey::Average => compare_f32(a.average(), b.average()),
            SortKey::Score(subject) => compare_f32(a.score(*subject), b.score(*subject)),
            SortKey::Age => a.age().cmp(&b.age()),
            SortKey::Id => a.id().cmp(b.id()),
            SortKey::Name => a.name().cmp(b.name()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Average => "average",
            SortKey::Score(subject) => subject.as_str(),
            SortKey::Age => "age",
            SortKey::Id => "id",
            SortKey::Name => "name",
        }
    }
}

// Stored scores are validated non-NaN, so the fallback is never taken.
fn compare_f32(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Sort specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }

    /// Compares two records under this spec.
    ///
    /// Descending reverses the comparison, not the sorted output, so equal
    /// keys still compare `Equal` and keep input order.
    pub fn compare(&self, a: &StudentRecord, b: &StudentRecord) -> Ordering {
        let ordering = self.key.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}
