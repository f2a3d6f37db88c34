//! Aggregate statistics over a roster snapshot

mod statistics;

pub use statistics::{compute_statistics, RosterStatistics};
