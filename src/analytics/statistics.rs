//! Per-subject means, overall mean, and extreme-average holders
//!
//! Max/min holders are seeded with the first record and replaced only on a
//! strict improvement, so among equal extremes the earliest record wins.

use serde::Serialize;

use crate::record::{Subject, SUBJECT_COUNT};
use crate::roster::{RecordHandle, RosterError, RosterResult, RosterStore};

/// Statistics over the records currently in a store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterStatistics {
    /// Number of records aggregated
    pub count: usize,
    /// Mean score per subject, in persisted subject order
    pub per_subject_means: [f32; SUBJECT_COUNT],
    /// Mean of all record averages
    pub overall_mean: f32,
    /// Earliest record holding the highest average
    pub max_average_holder: RecordHandle,
    pub max_average: f32,
    /// Earliest record holding the lowest average
    pub min_average_holder: RecordHandle,
    pub min_average: f32,
}

impl RosterStatistics {
    pub fn subject_mean(&self, subject: Subject) -> f32 {
        self.per_subject_means[subject.index()]
    }
}

/// Computes statistics over the store.
///
/// # Errors
///
/// Returns `RosterError::EmptyRoster` if the store holds no records.
pub fn compute_statistics(store: &RosterStore) -> RosterResult<RosterStatistics> {
    let records = store.records();
    let first = records.first().ok_or(RosterError::EmptyRoster)?;

    let mut subject_totals = [0f64; SUBJECT_COUNT];
    let mut average_total = 0f64;
    let (mut max_index, mut max_average) = (0, first.average());
    let (mut min_index, mut min_average) = (0, first.average());

    for (i, record) in records.iter().enumerate() {
        for (total, score) in subject_totals.iter_mut().zip(record.scores().as_array()) {
            *total += f64::from(score);
        }
        average_total += f64::from(record.average());

        if record.average() > max_average {
            max_average = record.average();
            max_index = i;
        }
        if record.average() < min_average {
            min_average = record.average();
            min_index = i;
        }
    }

    let count = records.len() as f64;
    Ok(RosterStatistics {
        count: records.len(),
        per_subject_means: subject_totals.map(|total| (total / count) as f32),
        overall_mean: (average_total / count) as f32,
        max_average_holder: RecordHandle::new(max_index),
        max_average,
        min_average_holder: RecordHandle::new(min_index),
        min_average,
    })
}
