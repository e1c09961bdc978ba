//! Tests for the Makai Cache implementation.
//!
//! This module contains scenario tests for capacity handling, eviction
//! order, and snapshot round trips.

use crate::data_structures::makai_cache::MakaiCache;

fn populated(capacity: usize, items: &[(&str, &str)]) -> MakaiCache<String> {
    let mut cache = MakaiCache::new(capacity);
    for (key, value) in items {
        cache.set(*key, value.to_string());
    }
    cache
}

#[test]
fn test_disabled_cache_keeps_no_items() {
    let cache = populated(0, &[("one", "1"), ("two", "2")]);
    assert_eq!(cache.get("one"), None);
    assert_eq!(cache.get("two"), None);
    assert!(cache.is_empty());
}

#[test]
fn test_capacity_is_respected() {
    let cache = populated(1, &[("one", "1"), ("two", "2")]);
    assert_eq!(cache.get("one"), None);
    assert_eq!(cache.get("two"), Some(&"2".to_string()));
}

#[test]
fn test_lru_eviction_after_promotion() {
    // Re-setting "one" promotes it, so "two" is the eviction victim.
    let cache = populated(
        2,
        &[("one", "1"), ("two", "2"), ("one", "1"), ("three", "3")],
    );
    assert_eq!(cache.get("one"), Some(&"1".to_string()));
    assert_eq!(cache.get("two"), None);
    assert_eq!(cache.get("three"), Some(&"3".to_string()));
}

#[test]
fn test_eviction_order_walk() {
    let cache = populated(3, &[("a", "1"), ("b", "2"), ("c", "3"), ("a", "1")]);
    let order: Vec<&str> = cache.iter().map(|(key, _)| key).collect();
    assert_eq!(order, vec!["a", "c", "b"]);
}

fn round_trip(cache: &MakaiCache<String>) -> MakaiCache<String> {
    let mut buffer = Vec::new();
    cache.snapshot(&mut buffer).expect("snapshot failed");
    MakaiCache::restore(buffer.as_slice()).expect("restore failed")
}

#[test]
fn test_snapshot_round_trip_full_cache() {
    let cache = populated(
        2,
        &[("one", "1"), ("two", "2"), ("one", "1"), ("three", "3")],
    );
    let restored = round_trip(&cache);

    assert_eq!(restored.capacity(), cache.capacity());
    let expected: Vec<(&str, &String)> = cache.iter().collect();
    let got: Vec<(&str, &String)> = restored.iter().collect();
    assert_eq!(expected, got);
}

#[test]
fn test_snapshot_round_trip_partial_cache() {
    let cache = populated(2, &[("one", "1")]);
    let restored = round_trip(&cache);
    assert_eq!(restored.len(), 1);
    assert_eq!(restored.get("one"), Some(&"1".to_string()));
}

#[test]
fn test_snapshot_round_trip_disabled_cache() {
    let cache = populated(0, &[]);
    let restored = round_trip(&cache);
    assert_eq!(restored.capacity(), 0);

    // The restored cache still rejects insertions.
    let mut restored = restored;
    restored.set("one", "1".to_string());
    assert!(restored.is_empty());
}

#[test]
fn test_restored_cache_keeps_evicting_in_order() {
    let cache = populated(2, &[("old", "0"), ("new", "1")]);
    let mut restored = round_trip(&cache);

    restored.set("newest", "2".to_string());
    assert_eq!(restored.get("old"), None);
    assert_eq!(restored.get("new"), Some(&"1".to_string()));
    assert_eq!(restored.get("newest"), Some(&"2".to_string()));
}
