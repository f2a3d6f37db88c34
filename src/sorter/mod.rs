//! In-place roster ordering
//!
//! Sorts the store's own sequence by one key. Every sort is stable: records
//! with equal keys keep their relative order in both directions.

mod key;
mod roster_sorter;

pub use key::{SortDirection, SortKey, SortSpec};
pub use roster_sorter::{sort_by_average, RosterSorter};
