//! Stable in-place sorting of a roster store

use super::key::{SortDirection, SortKey, SortSpec};
use crate::roster::RosterStore;

/// Sorts a roster store in place
pub struct RosterSorter;

impl RosterSorter {
    /// Reorders the store according to the sort specification.
    ///
    /// Uses the standard stable merge sort. An empty store is left as is.
    pub fn sort(store: &mut RosterStore, spec: &SortSpec) {
        store.records_mut().sort_by(|a, b| spec.compare(a, b));
    }
}

/// Reorders the store by average score.
pub fn sort_by_average(store: &mut RosterStore, direction: SortDirection) {
    RosterSorter::sort(
        store,
        &SortSpec {
            key: SortKey::Average,
            direction,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{NewStudent, Scores, Subject};

    fn store_with(entries: &[(&str, &str, i32, f32)]) -> RosterStore {
        let mut store = RosterStore::new();
        for (id, name, age, score) in entries {
            store
                .create(NewStudent::new(
                    *id,
                    *name,
                    *age,
                    Scores::new(*score, *score, *score),
                ))
                .unwrap();
        }
        store
    }

    fn ids(store: &RosterStore) -> Vec<&str> {
        store.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_sort_by_average_ascending() {
        let mut store = store_with(&[
            ("c", "x", 20, 90.0),
            ("a", "x", 20, 60.0),
            ("b", "x", 20, 75.0),
        ]);

        sort_by_average(&mut store, SortDirection::Asc);

        assert_eq!(ids(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_by_average_descending() {
        let mut store = store_with(&[
            ("c", "x", 20, 90.0),
            ("a", "x", 20, 60.0),
            ("b", "x", 20, 75.0),
        ]);

        sort_by_average(&mut store, SortDirection::Desc);

        assert_eq!(ids(&store), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_stable_both_directions() {
        let entries = [
            ("p", "x", 20, 80.0),
            ("q", "x", 20, 70.0),
            ("r", "x", 20, 80.0),
            ("s", "x", 20, 70.0),
        ];

        let mut asc = store_with(&entries);
        sort_by_average(&mut asc, SortDirection::Asc);
        assert_eq!(ids(&asc), vec!["q", "s", "p", "r"]);

        let mut desc = store_with(&entries);
        sort_by_average(&mut desc, SortDirection::Desc);
        assert_eq!(ids(&desc), vec!["p", "r", "q", "s"]);
    }

    #[test]
    fn test_sort_signed_zero_averages_tie() {
        let mut store = store_with(&[("P", "x", 20, 0.0), ("N", "x", 20, -0.0)]);
        assert_eq!(store.records()[0].average(), store.records()[1].average());

        sort_by_average(&mut store, SortDirection::Asc);
        assert_eq!(ids(&store), vec!["P", "N"]);

        sort_by_average(&mut store, SortDirection::Desc);
        assert_eq!(ids(&store), vec!["P", "N"]);

        RosterSorter::sort(&mut store, &SortSpec::asc(SortKey::Score(Subject::Math)));
        assert_eq!(ids(&store), vec!["P", "N"]);
    }

    #[test]
    fn test_sort_by_other_keys() {
        let mut store = store_with(&[
            ("b2", "carol", 30, 50.0),
            ("a1", "alice", 40, 60.0),
            ("c3", "bob", 18, 70.0),
        ]);

        RosterSorter::sort(&mut store, &SortSpec::asc(SortKey::Name));
        assert_eq!(ids(&store), vec!["a1", "c3", "b2"]);

        RosterSorter::sort(&mut store, &SortSpec::desc(SortKey::Age));
        assert_eq!(ids(&store), vec!["a1", "b2", "c3"]);

        RosterSorter::sort(&mut store, &SortSpec::asc(SortKey::Id));
        assert_eq!(ids(&store), vec!["a1", "b2", "c3"]);

        RosterSorter::sort(&mut store, &SortSpec::desc(SortKey::Score(Subject::Math)));
        assert_eq!(ids(&store), vec!["c3", "a1", "b2"]);
    }

    #[test]
    fn test_sort_empty_is_noop() {
        let mut store = RosterStore::new();
        sort_by_average(&mut store, SortDirection::Desc);
        assert!(store.is_empty());
    }
}
