//! Roster Invariant Tests
//!
//! Tests for store invariants:
//! - Ids are unique across every sequence of creates
//! - The store never exceeds its capacity
//! - Averages always match the scores
//! - Deletes compact without reordering
//! - Sorting orders adjacent pairs and keeps ties stable

use rosterdb::analytics::compute_statistics;
use rosterdb::record::{FieldUpdate, NewStudent, Scores, Subject};
use rosterdb::roster::{RosterStore, MAX_STUDENTS};
use rosterdb::sorter::{sort_by_average, SortDirection};
use rosterdb::ErrorKind;

// =============================================================================
// Test Utilities
// =============================================================================

fn candidate(id: &str, scores: (f32, f32, f32)) -> NewStudent {
    NewStudent::new(id, "student", 20, Scores::new(scores.0, scores.1, scores.2))
}

/// Deterministic pseudo-random scores in 0..=100
fn scores_for(seed: usize) -> (f32, f32, f32) {
    let s = (seed * 37 + 11) % 101;
    let t = (seed * 53 + 7) % 101;
    let u = (seed * 71 + 3) % 101;
    (s as f32, t as f32, u as f32)
}

fn assert_averages_consistent(store: &RosterStore) {
    for record in store.iter() {
        let expected = (record.score(Subject::Math)
            + record.score(Subject::English)
            + record.score(Subject::Chinese))
            / 3.0;
        assert!(
            (record.average() - expected).abs() < 1e-4,
            "average drifted for {}",
            record.id()
        );
    }
}

fn ids(store: &RosterStore) -> Vec<String> {
    store.iter().map(|r| r.id().to_string()).collect()
}

// =============================================================================
// Uniqueness
// =============================================================================

#[test]
fn test_ids_stay_unique_under_colliding_creates() {
    let mut store = RosterStore::new();

    for i in 0..60 {
        let id = format!("S{}", i % 20);
        let before = store.clone();
        match store.create(candidate(&id, scores_for(i))) {
            Ok(_) => {}
            Err(e) => {
                assert_eq!(e.kind(), ErrorKind::DuplicateId);
                assert_eq!(store, before, "rejected create must not change the store");
            }
        }
    }

    let mut seen = ids(&store);
    assert_eq!(seen.len(), 20);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 20);
}

#[test]
fn test_empty_and_repeated_id_scenario() {
    let mut store = RosterStore::new();

    let err = store.create(candidate("", (1.0, 2.0, 3.0))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidFormat);

    store.create(candidate("A1", (1.0, 2.0, 3.0))).unwrap();
    let err = store.create(candidate("A1", (4.0, 5.0, 6.0))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateId);
    assert_eq!(store.len(), 1);
}

// =============================================================================
// Capacity
// =============================================================================

#[test]
fn test_capacity_plus_one_create_rejected() {
    let mut store = RosterStore::new();
    assert_eq!(store.capacity(), MAX_STUDENTS);

    for i in 0..MAX_STUDENTS {
        store.create(candidate(&format!("S{}", i), scores_for(i))).unwrap();
    }

    let err = store.create(candidate("EXTRA", (50.0, 50.0, 50.0))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
    assert_eq!(store.len(), MAX_STUDENTS);
}

#[test]
fn test_delete_frees_capacity() {
    let mut store = RosterStore::with_capacity(3);
    for id in ["A", "B", "C"] {
        store.create(candidate(id, (1.0, 1.0, 1.0))).unwrap();
    }
    assert!(store.is_full());

    store.delete_by_id("B").unwrap();
    store.create(candidate("D", (1.0, 1.0, 1.0))).unwrap();
    assert_eq!(ids(&store), vec!["A", "C", "D"]);
}

// =============================================================================
// Average Consistency
// =============================================================================

#[test]
fn test_averages_consistent_after_every_mutation() {
    let mut store = RosterStore::new();
    for i in 0..10 {
        store.create(candidate(&format!("S{}", i), scores_for(i))).unwrap();
        assert_averages_consistent(&store);
    }

    for (i, subject) in Subject::ALL.iter().cycle().take(30).enumerate() {
        let id = format!("S{}", i % 10);
        let value = (i * 13 % 101) as f32;
        store
            .update_by_id(&id, FieldUpdate::Score(*subject, value))
            .unwrap();
        assert_averages_consistent(&store);
    }

    // Rejected updates leave averages untouched
    assert!(store
        .update_by_id("S0", FieldUpdate::Score(Subject::Math, f32::NAN))
        .is_err());
    assert_averages_consistent(&store);
}

// =============================================================================
// Delete Compaction
// =============================================================================

#[test]
fn test_delete_at_each_position_preserves_order() {
    let base: Vec<String> = (0..6).map(|i| format!("R{}", i)).collect();

    for k in 0..base.len() {
        let mut store = RosterStore::new();
        for (i, id) in base.iter().enumerate() {
            store.create(candidate(id, scores_for(i))).unwrap();
        }

        let handle = store.find_by_id(&base[k]).unwrap();
        store.delete(handle).unwrap();

        let mut expected = base.clone();
        expected.remove(k);
        assert_eq!(ids(&store), expected);
    }
}

// =============================================================================
// Sort Correctness
// =============================================================================

#[test]
fn test_sort_orders_adjacent_pairs() {
    let mut store = RosterStore::new();
    for i in 0..40 {
        store.create(candidate(&format!("S{}", i), scores_for(i))).unwrap();
    }

    sort_by_average(&mut store, SortDirection::Asc);
    for pair in store.records().windows(2) {
        assert!(pair[0].average() <= pair[1].average());
    }

    sort_by_average(&mut store, SortDirection::Desc);
    for pair in store.records().windows(2) {
        assert!(pair[0].average() >= pair[1].average());
    }
    assert_eq!(store.len(), 40);
}

#[test]
fn test_sort_ties_keep_input_order() {
    let mut store = RosterStore::new();
    for (id, avg) in [("e", 70.0), ("a", 90.0), ("d", 70.0), ("b", 90.0), ("c", 70.0)] {
        store.create(candidate(id, (avg, avg, avg))).unwrap();
    }

    sort_by_average(&mut store, SortDirection::Desc);
    assert_eq!(ids(&store), vec!["a", "b", "e", "d", "c"]);

    sort_by_average(&mut store, SortDirection::Asc);
    assert_eq!(ids(&store), vec!["e", "d", "c", "a", "b"]);
}

// =============================================================================
// Analytics
// =============================================================================

#[test]
fn test_statistics_scenario() {
    let mut store = RosterStore::new();
    store.create(candidate("A1", (80.0, 90.0, 100.0))).unwrap();
    store.create(candidate("B2", (60.0, 70.0, 80.0))).unwrap();
    store.create(candidate("C3", (90.0, 90.0, 90.0))).unwrap();

    let stats = compute_statistics(&store).unwrap();
    assert!((stats.overall_mean - 83.33).abs() < 1e-2);
    assert_eq!(store.get(stats.max_average_holder).unwrap().id(), "A1");
    assert_eq!(store.get(stats.min_average_holder).unwrap().id(), "B2");
}

#[test]
fn test_statistics_after_sort_follow_new_order() {
    let mut store = RosterStore::new();
    store.create(candidate("A1", (80.0, 90.0, 100.0))).unwrap();
    store.create(candidate("C3", (90.0, 90.0, 90.0))).unwrap();

    // C3 ties A1; after sorting by id descending C3 comes first and wins
    rosterdb::sorter::RosterSorter::sort(
        &mut store,
        &rosterdb::sorter::SortSpec::desc(rosterdb::sorter::SortKey::Id),
    );
    let stats = compute_statistics(&store).unwrap();
    assert_eq!(store.get(stats.max_average_holder).unwrap().id(), "C3");
}
