//! Correctness Tests for the LFU Cache
//!
//! This module validates the eviction policy, frequency accounting and rank
//! ordering of `LfuCache` using small caches and deterministic access
//! patterns. Each eviction test checks exactly which key was removed.
//!
//! ## Test Strategy
//! - Small cache sizes (0-5 entries) for predictable behavior
//! - Explicit checks for which key was evicted after each put
//! - Rank order checked through `iter()` after interesting operations

use lfucache::config::{LfuCacheConfig, DEFAULT_CAPACITY};
use lfucache::{CacheError, LfuCache};
use std::hash::Hash;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Helper to create an LfuCache with the given capacity
fn make_lfu<K: Hash + Eq + Clone, V>(cap: usize) -> LfuCache<K, V> {
    LfuCache::init(LfuCacheConfig { capacity: cap }, None)
}

/// Keys in rank order
fn ranked<K: Hash + Eq + Copy, V>(cache: &LfuCache<K, V>) -> Vec<K> {
    cache.iter().map(|(k, _)| *k).collect()
}

/// (key, frequency) pairs in rank order
fn ranked_frequencies<K: Hash + Eq + Copy, V>(cache: &LfuCache<K, V>) -> Vec<(K, usize)> {
    cache
        .iter()
        .map(|(k, _)| (*k, cache.frequency(k).unwrap()))
        .collect()
}

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[test]
fn test_get_raises_frequency() {
    let mut cache = make_lfu(2);
    cache.put(1, 1);
    cache.put(2, 2);

    assert_eq!(cache.get(&1), Ok(&1));
    assert_eq!(cache.frequency(&1), Ok(2));
    assert_eq!(cache.frequency(&2), Ok(1));
}

#[test]
fn test_put_evicts_lower_frequency() {
    let mut cache = make_lfu(2);
    cache.put(1, 1);
    cache.put(2, 2);
    cache.get(&1).unwrap();

    cache.put(3, 3);

    // VALIDATE EVICTION: key 2 had frequency 1
    assert_eq!(cache.get(&2), Err(CacheError::NotFound));
    assert_eq!(ranked_frequencies(&cache), vec![(1, 2), (3, 1)]);
}

#[test]
fn test_capacity_one_replaces_sole_entry() {
    let mut cache = make_lfu(1);
    cache.put(1, 1);
    cache.put(2, 2);

    assert_eq!(cache.get(&1), Err(CacheError::NotFound));
    assert_eq!(cache.get(&2), Ok(&2));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_frequency_is_read_only() {
    let mut cache = make_lfu(2);
    cache.put(1, 1);

    assert_eq!(cache.frequency(&1), Ok(1));
    assert_eq!(cache.frequency(&1), Ok(1));
    assert_eq!(ranked(&cache), vec![1]);
}

#[test]
fn test_zero_capacity_cache_stays_empty() {
    let mut cache = make_lfu(0);
    cache.put(1, 1);

    assert_eq!(cache.len(), 0);
    assert_eq!(cache.get(&1), Err(CacheError::NotFound));
    assert_eq!(cache.iter().count(), 0);
}

#[test]
fn test_default_capacity_is_five() {
    let mut cache: LfuCache<u32, u32> = LfuCache::default();
    assert_eq!(cache.cap(), DEFAULT_CAPACITY);

    for i in 0..10 {
        cache.put(i, i);
    }
    assert_eq!(cache.len(), 5);
    // The most recent insert survives each round; only the last five remain.
    assert_eq!(ranked(&cache), vec![9, 8, 7, 6, 5]);
}

// ============================================================================
// LFU CORRECTNESS
// ============================================================================
// Correctness criteria:
// 1. Items with lowest access frequency are evicted first
// 2. Among same frequency, the least recently used is evicted
// 3. Each get() and each put() on an existing key increases frequency by one

#[test]
fn test_lfu_evicts_least_frequently_used() {
    let mut cache = make_lfu(3);

    cache.put(1, 10); // freq=1
    cache.put(2, 20); // freq=1
    cache.put(3, 30); // freq=1

    cache.get(&1).unwrap(); // freq=2
    cache.get(&1).unwrap(); // freq=3
    cache.get(&2).unwrap(); // freq=2

    cache.put(4, 40);

    // VALIDATE EVICTION: Key 3 should be evicted (freq=1)
    assert!(cache.get(&3).is_err(), "Key 3 should be evicted (lowest freq=1)");
    assert!(cache.get(&1).is_ok(), "Key 1 should remain (freq=3)");
    assert!(cache.get(&2).is_ok(), "Key 2 should remain (freq=2)");
    assert!(cache.get(&4).is_ok(), "Key 4 should be present");
}

#[test]
fn test_lfu_frequency_accumulates() {
    let mut cache = make_lfu(3);

    cache.put("hot", 1);
    cache.put("warm", 2);
    cache.put("cold", 3);

    for _ in 0..10 {
        cache.get(&"hot").unwrap();
    }
    for _ in 0..3 {
        cache.get(&"warm").unwrap();
    }
    assert_eq!(
        ranked_frequencies(&cache),
        vec![("hot", 11), ("warm", 4), ("cold", 1)]
    );

    cache.put("new", 4);

    // VALIDATE EVICTION: "cold" should be evicted (freq=1)
    assert!(cache.get(&"cold").is_err(), "cold should be evicted (lowest freq)");
    assert!(cache.get(&"hot").is_ok(), "hot should remain");
    assert!(cache.get(&"warm").is_ok(), "warm should remain");
    assert!(cache.get(&"new").is_ok(), "new should be present");
}

#[test]
fn test_lfu_same_frequency_evicts_least_recent() {
    let mut cache = make_lfu(3);

    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(3, 30);

    cache.put(4, 40);
    assert!(cache.get(&1).is_err(), "Key 1 is the oldest at freq=1");

    // 4 moves up to freq=2; 2 and 3 remain at freq=1 with 2 older.
    cache.get(&4).unwrap();
    cache.put(5, 50);
    assert!(cache.get(&2).is_err(), "Key 2 is the oldest at freq=1");
    assert_eq!(ranked(&cache), vec![4, 5, 3]);
}

#[test]
fn test_lfu_recency_tie_break_follows_last_access_not_insertion() {
    let mut cache = make_lfu(3);

    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);

    // Bring everyone to freq=2, touching "c" first and "b" last.
    cache.get(&"c").unwrap();
    cache.get(&"a").unwrap();
    cache.get(&"b").unwrap();
    assert_eq!(ranked(&cache), vec!["b", "a", "c"]);

    // No freq=1 entries: the least recent at freq=2 goes.
    cache.put("d", 4);
    assert!(!cache.contains_key(&"c"), "c is the least recent at freq=2");
    assert_eq!(ranked(&cache), vec!["b", "a", "d"]);

    cache.put("e", 5);
    assert!(!cache.contains_key(&"d"), "d is alone at freq=1");

    cache.get(&"e").unwrap();
    assert_eq!(ranked(&cache), vec!["e", "b", "a"]);

    cache.put("f", 6);
    assert!(!cache.contains_key(&"a"), "a is now the least recent at freq=2");
    assert_eq!(ranked(&cache), vec!["e", "b", "f"]);
}

#[test]
fn test_update_counts_as_access() {
    let mut cache = make_lfu(2);
    cache.put("a", 1);
    cache.put("b", 2);

    cache.put("a", 100);
    assert_eq!(cache.frequency(&"a"), Ok(2));
    assert_eq!(cache.peek(&"a"), Some(&100));

    cache.put("c", 3);
    assert!(!cache.contains_key(&"b"), "b was never touched again");
    assert_eq!(cache.get(&"a"), Ok(&100));
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_capacity_bound_and_one_eviction_per_new_key() {
    let mut cache = make_lfu(4);
    for i in 0..4 {
        cache.put(i, i);
    }
    assert_eq!(cache.len(), cache.cap());

    for i in 4..50 {
        if i % 3 == 0 {
            let _ = cache.get(&(i - 1));
        }
        let before: Vec<_> = ranked(&cache);
        cache.put(i, i);
        assert_eq!(cache.len(), cache.cap());

        let gone: Vec<_> = before
            .iter()
            .filter(|k| !cache.contains_key(*k))
            .collect();
        assert_eq!(gone.len(), 1, "exactly one entry evicted for key {i}");
        assert_eq!(gone[0], before.last().unwrap(), "the back was evicted");
    }
}

#[test]
fn test_frequency_increases_by_exactly_one_per_access() {
    let mut cache = make_lfu(3);
    cache.put('x', 0);

    for n in 1..=20 {
        if n % 2 == 0 {
            cache.get(&'x').unwrap();
        } else {
            cache.put('x', n);
        }
        assert_eq!(cache.frequency(&'x'), Ok(n as usize + 1));
    }
}

#[test]
fn test_repeated_get_returns_same_value() {
    let mut cache = make_lfu(2);
    cache.put("k", String::from("v"));

    for expected_freq in 2..6 {
        assert_eq!(cache.get(&"k").map(String::as_str), Ok("v"));
        assert_eq!(cache.frequency(&"k"), Ok(expected_freq));
    }
}

#[test]
fn test_iteration_is_rank_ordered() {
    let mut cache = make_lfu(5);
    for k in 1..=5 {
        cache.put(k, ());
    }
    let touches = [3, 5, 3, 1, 5, 3, 2];
    for k in touches {
        cache.get(&k).unwrap();
    }

    let pairs = ranked_frequencies(&cache);
    assert_eq!(pairs, vec![(3, 4), (5, 3), (2, 2), (1, 2), (4, 1)]);
    assert_eq!(cache.iter().len(), cache.len());

    for window in pairs.windows(2) {
        assert!(window[0].1 >= window[1].1);
    }
}

#[test]
fn test_iteration_is_lazy_and_restartable() {
    let mut cache = make_lfu(3);
    cache.put(1, "one");
    cache.put(2, "two");
    cache.put(3, "three");

    let first = cache.iter().next();
    assert_eq!(first, Some((&3, &"three")));

    let mut count = 0;
    for (k, _) in &cache {
        count += 1;
        if *k == 2 {
            break;
        }
    }
    assert_eq!(count, 2);

    // Traversal has no side effects.
    assert_eq!(cache.frequency(&3), Ok(1));
    assert_eq!(ranked(&cache), vec![3, 2, 1]);
}

#[test]
fn test_round_trip() {
    let mut cache = make_lfu(1);
    for (k, v) in [(1, "a"), (2, "b"), (3, "c")] {
        cache.put(k, v);
        assert_eq!(cache.get(&k), Ok(&v));
    }
}

#[test]
fn test_miss_does_not_mutate() {
    let mut cache = make_lfu(2);
    cache.put(1, 1);
    cache.put(2, 2);
    let before = ranked_frequencies(&cache);

    assert_eq!(cache.get(&3), Err(CacheError::NotFound));
    assert!(cache.get_mut(&3).is_err());
    assert_eq!(cache.frequency(&3), Err(CacheError::NotFound));

    assert_eq!(ranked_frequencies(&cache), before);
}
